//! Weighted match scoring, in two profiles: the strategy profile drives the
//! three strategy cards, the assistant profile drives free-text
//! recommendations. Scoring returns structured facts; reason text is rendered
//! by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::domain::criteria::{BudgetRange, FilterCriteria};
use crate::domain::vehicle::{BodyCategory, FuelType, QualitySpecs, Vehicle};
use crate::intent::Intent;

/// Strategy profile: flat bonus for landing inside the budget window.
pub const IN_BUDGET_BONUS: u32 = 30;
/// Strategy profile: cap on the midpoint-proximity bonus.
pub const BUDGET_PROXIMITY_MAX: u32 = 15;
/// Strategy profile: fuel filter accepted the record.
pub const FUEL_ACCEPT_BONUS: u32 = 20;
/// Both profiles: per matched lifestyle tag, uncapped.
pub const LIFESTYLE_MATCH_BONUS: u32 = 15;

/// Assistant profile clause bonuses.
pub const ASSISTANT_BUDGET_BONUS: u32 = 25;
pub const ASSISTANT_FUEL_BONUS: u32 = 15;
pub const ASSISTANT_CATEGORY_BONUS: u32 = 15;
pub const ASSISTANT_BRAND_BONUS: u32 = 25;
/// Half-width of the window around an intent's exact price.
pub const EXACT_PRICE_WINDOW: u32 = 1000;

/// One matched clause, as fact rather than phrasing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchFact {
    BudgetFit { price: u32 },
    /// `from_intent` marks whether the user's message named the fuel; only
    /// intent-driven matches are surfaced as reasons.
    FuelMatch { fuel: FuelType, from_intent: bool },
    CategoryMatch { category: BodyCategory },
    BrandMatch { brand: String },
    LifestyleFit { tags: Vec<String> },
}

/// Constraint set the assistant actually scores against: the user's message
/// merged over the session's active filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveCriteria {
    pub budget: BudgetRange,
    pub fuel_types: Vec<FuelType>,
    pub fuel_from_intent: bool,
    pub lifestyles: Vec<String>,
}

impl EffectiveCriteria {
    /// Budget: exact price ± 1000 beats the qualitative hint beats the session
    /// window. Fuel: intent replaces the session set when non-empty.
    /// Lifestyles: intent tags union session tags, intent first, deduplicated.
    pub fn merge(intent: &Intent, session: &FilterCriteria) -> Self {
        let budget = if let Some(exact) = intent.exact_price {
            BudgetRange {
                min: exact.saturating_sub(EXACT_PRICE_WINDOW),
                max: exact.saturating_add(EXACT_PRICE_WINDOW),
            }
        } else {
            intent.budget_range.unwrap_or(session.budget)
        };

        let (fuel_types, fuel_from_intent) = if intent.fuel_types.is_empty() {
            (session.fuel_types.clone(), false)
        } else {
            (intent.fuel_types.clone(), true)
        };

        let lifestyles = if intent.lifestyles.is_empty() {
            session.lifestyles.clone()
        } else {
            let mut merged = intent.lifestyles.clone();
            for tag in &session.lifestyles {
                if !merged.contains(tag) {
                    merged.push(tag.clone());
                }
            }
            merged
        };

        Self { budget, fuel_types, fuel_from_intent, lifestyles }
    }
}

/// Quality tiebreaker shared by both profiles: `round(avg(specs) / 10)`,
/// so at most 10 points.
pub fn spec_bonus(specs: &QualitySpecs) -> u32 {
    (specs.average() / 10.0).round() as u32
}

/// Strategy-profile score. Always >= 0; the proximity bonus rewards prices
/// near the budget midpoint and contributes at most [`BUDGET_PROXIMITY_MAX`].
pub fn strategy_score(vehicle: &Vehicle, criteria: &FilterCriteria) -> u32 {
    let mut score = 0;

    if criteria.budget.contains(vehicle.price) {
        score += IN_BUDGET_BONUS;
        let distance = (f64::from(vehicle.price) - criteria.budget.midpoint()).abs()
            / f64::from(criteria.budget.width());
        score += ((1.0 - distance) * f64::from(BUDGET_PROXIMITY_MAX)).round() as u32;
    }

    if criteria.accepts_fuel(vehicle.fuel_type) {
        score += FUEL_ACCEPT_BONUS;
    }

    if !criteria.lifestyles.is_empty() {
        let matched = criteria.matched_lifestyles(vehicle).len() as u32;
        score += matched * LIFESTYLE_MATCH_BONUS;
    }

    score + spec_bonus(&vehicle.specs)
}

/// Assistant-profile score with the facts that earned it.
pub fn assistant_score(
    vehicle: &Vehicle,
    intent: &Intent,
    effective: &EffectiveCriteria,
) -> (u32, Vec<MatchFact>) {
    let mut score = 0;
    let mut facts = Vec::new();

    if effective.budget.contains(vehicle.price) {
        score += ASSISTANT_BUDGET_BONUS;
        facts.push(MatchFact::BudgetFit { price: vehicle.price });
    }

    if effective.fuel_types.is_empty() || effective.fuel_types.contains(&vehicle.fuel_type) {
        score += ASSISTANT_FUEL_BONUS;
        facts.push(MatchFact::FuelMatch {
            fuel: vehicle.fuel_type,
            from_intent: effective.fuel_from_intent,
        });
    }

    if !intent.categories.is_empty() && intent.categories.contains(&vehicle.category) {
        score += ASSISTANT_CATEGORY_BONUS;
        facts.push(MatchFact::CategoryMatch { category: vehicle.category });
    }

    if !intent.brands.is_empty() && intent.brands.iter().any(|brand| brand == &vehicle.brand) {
        score += ASSISTANT_BRAND_BONUS;
        facts.push(MatchFact::BrandMatch { brand: vehicle.brand.clone() });
    }

    if !effective.lifestyles.is_empty() {
        let matched: Vec<String> = effective
            .lifestyles
            .iter()
            .filter(|tag| vehicle.has_lifestyle(tag))
            .cloned()
            .collect();
        if !matched.is_empty() {
            score += matched.len() as u32 * LIFESTYLE_MATCH_BONUS;
            facts.push(MatchFact::LifestyleFit { tags: matched });
        }
    }

    score += spec_bonus(&vehicle.specs);
    (score, facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::BudgetRange;
    use crate::domain::vehicle::{Origin, VehicleId};

    fn vehicle(price: u32, avg_spec: u8) -> Vehicle {
        Vehicle {
            id: VehicleId("test".to_string()),
            brand: "KIA".to_string(),
            model: "Test".to_string(),
            price,
            view_count: None,
            fuel_type: FuelType::Hybrid,
            category: BodyCategory::Suv,
            year: 2025,
            image: String::new(),
            tags: Vec::new(),
            lifestyles: vec!["캠핑".to_string(), "출퇴근용".to_string()],
            origin: Origin::Domestic,
            specs: QualitySpecs {
                price_value: avg_spec,
                fuel_economy: avg_spec,
                design: avg_spec,
                space: avg_spec,
                safety: avg_spec,
            },
            ai_comment: String::new(),
        }
    }

    #[test]
    fn midpoint_price_earns_full_proximity_bonus() {
        let criteria = FilterCriteria::new(BudgetRange::new(2000, 4000));
        // in-budget 30 + proximity 15 + fuel 20 + specs 8
        assert_eq!(strategy_score(&vehicle(3000, 80), &criteria), 73);
    }

    #[test]
    fn proximity_bonus_never_exceeds_cap() {
        for price in [2000u32, 2500, 3000, 3500, 4000] {
            let criteria = FilterCriteria::new(BudgetRange::new(2000, 4000));
            let base = strategy_score(&vehicle(price, 0), &criteria);
            // in-budget 30 + fuel 20, so proximity is whatever remains
            let proximity = base - IN_BUDGET_BONUS - FUEL_ACCEPT_BONUS;
            assert!(proximity <= BUDGET_PROXIMITY_MAX, "price {price} gave {proximity}");
        }
    }

    #[test]
    fn out_of_budget_record_skips_both_budget_bonuses() {
        let criteria = FilterCriteria::new(BudgetRange::new(2000, 4000));
        assert_eq!(strategy_score(&vehicle(9000, 0), &criteria), FUEL_ACCEPT_BONUS);
    }

    #[test]
    fn zero_width_budget_does_not_divide_by_zero() {
        let criteria = FilterCriteria::new(BudgetRange::new(3000, 3000));
        let score = strategy_score(&vehicle(3000, 0), &criteria);
        assert_eq!(score, IN_BUDGET_BONUS + BUDGET_PROXIMITY_MAX + FUEL_ACCEPT_BONUS);
    }

    #[test]
    fn lifestyle_bonus_scales_with_match_count() {
        let criteria = FilterCriteria::new(BudgetRange::new(5000, 6000))
            .with_lifestyles(vec!["캠핑".to_string(), "출퇴근용".to_string()]);
        // out of budget, fuel accepted: 20 + 2 matches * 15
        assert_eq!(strategy_score(&vehicle(9000, 0), &criteria), 50);
    }

    #[test]
    fn exact_price_overrides_hint_and_session_budget() {
        let intent = Intent {
            exact_price: Some(5000),
            budget_range: Some(BudgetRange::new(0, 3500)),
            ..Intent::default()
        };
        let session = FilterCriteria::new(BudgetRange::new(1500, 8000));
        let effective = EffectiveCriteria::merge(&intent, &session);
        assert_eq!(effective.budget, BudgetRange { min: 4000, max: 6000 });
    }

    #[test]
    fn exact_price_near_u32_max_saturates_the_window() {
        let intent = Intent { exact_price: Some(u32::MAX), ..Intent::default() };
        let session = FilterCriteria::new(BudgetRange::new(1500, 8000));
        let effective = EffectiveCriteria::merge(&intent, &session);
        assert_eq!(effective.budget.max, u32::MAX);
        assert_eq!(effective.budget.min, u32::MAX - EXACT_PRICE_WINDOW);
    }

    #[test]
    fn intent_fuel_replaces_session_fuel() {
        let intent = Intent { fuel_types: vec![FuelType::Electric], ..Intent::default() };
        let session =
            FilterCriteria::new(BudgetRange::new(1500, 8000)).with_fuel_types(vec![FuelType::Diesel]);
        let effective = EffectiveCriteria::merge(&intent, &session);
        assert_eq!(effective.fuel_types, vec![FuelType::Electric]);
        assert!(effective.fuel_from_intent);
    }

    #[test]
    fn lifestyles_union_deduplicates() {
        let intent = Intent {
            lifestyles: vec!["캠핑".to_string(), "주말여행".to_string()],
            ..Intent::default()
        };
        let session = FilterCriteria::new(BudgetRange::new(1500, 8000))
            .with_lifestyles(vec!["캠핑".to_string(), "첫 차".to_string()]);
        let effective = EffectiveCriteria::merge(&intent, &session);
        assert_eq!(effective.lifestyles, vec!["캠핑", "주말여행", "첫 차"]);
    }

    #[test]
    fn session_driven_fuel_match_is_not_marked_intent_driven() {
        let intent = Intent::default();
        let session = FilterCriteria::new(BudgetRange::new(5000, 6000));
        let effective = EffectiveCriteria::merge(&intent, &session);
        let (_, facts) = assistant_score(&vehicle(3000, 50), &intent, &effective);
        assert!(facts
            .iter()
            .any(|fact| matches!(fact, MatchFact::FuelMatch { from_intent: false, .. })));
    }

    #[test]
    fn brand_fact_fires_only_when_intent_names_brands() {
        let session = FilterCriteria::new(BudgetRange::new(1500, 8000));
        let no_brands = Intent::default();
        let effective = EffectiveCriteria::merge(&no_brands, &session);
        let (_, facts) = assistant_score(&vehicle(3000, 50), &no_brands, &effective);
        assert!(!facts.iter().any(|fact| matches!(fact, MatchFact::BrandMatch { .. })));

        let with_brand = Intent { brands: vec!["KIA".to_string()], ..Intent::default() };
        let effective = EffectiveCriteria::merge(&with_brand, &session);
        let (_, facts) = assistant_score(&vehicle(3000, 50), &with_brand, &effective);
        assert!(facts.iter().any(|fact| matches!(fact, MatchFact::BrandMatch { .. })));
    }
}
