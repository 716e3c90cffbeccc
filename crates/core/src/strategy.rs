//! Greedy three-pick strategy selection: value, performance, trend. Picks are
//! drawn in that order from a single score-sorted candidate list, each pick
//! consuming its vehicle so the three slots never repeat a model.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::domain::criteria::FilterCriteria;
use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::scoring::strategy_score;

/// Minimum price-value sub-score for a vehicle to qualify as the value pick
/// without falling back to the overall leader.
const VALUE_SPEC_FLOOR: u8 = 75;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickKind {
    Value,
    Performance,
    Trend,
    Lifestyle,
}

/// One recommended slot with the evidence used to phrase its pitch.
#[derive(Clone, Debug)]
pub struct StrategyPick {
    pub kind: PickKind,
    pub vehicle: Vehicle,
    pub matched_lifestyles: Vec<String>,
    pub score: u32,
}

impl StrategyPick {
    pub fn label(&self) -> &'static str {
        match self.kind {
            PickKind::Value => "가성비 픽",
            PickKind::Performance => "퍼포먼스 픽",
            PickKind::Trend => "트렌드 픽",
            PickKind::Lifestyle => "라이프스타일 픽",
        }
    }

    /// One-line pitch for the pick, ending with the vehicle's own blurb.
    pub fn reason(&self) -> String {
        let tags = self.matched_lifestyles.join(", ");
        let comment = &self.vehicle.ai_comment;
        match self.kind {
            PickKind::Value if !tags.is_empty() => {
                format!("{tags} 라이프스타일에 적합하며, 가격 대비 성능이 뛰어납니다. {comment}")
            }
            PickKind::Value => format!("예산 대비 최고의 가치를 제공합니다. {comment}"),
            PickKind::Performance if !tags.is_empty() => {
                format!("{tags}에 딱 맞는 주행 성능을 제공합니다. {comment}")
            }
            PickKind::Performance => {
                format!("뛰어난 디자인과 안전성을 갖춘 고성능 모델입니다. {comment}")
            }
            PickKind::Lifestyle => format!("{tags} 생활에 최적화된 차량입니다. {comment}"),
            PickKind::Trend => format!("현재 가장 주목받는 모델입니다. {comment}"),
        }
    }
}

/// Selects up to three distinct picks for the given criteria. Catalogs with
/// fewer than three vehicles yield fewer picks rather than repeats.
pub fn select_strategies(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<StrategyPick> {
    let mut scored: Vec<(&Vehicle, u32)> = catalog
        .vehicles()
        .iter()
        .map(|vehicle| (vehicle, strategy_score(vehicle, criteria)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut picks = Vec::with_capacity(3);
    let mut used = BTreeSet::new();

    used = value_pick(&scored, criteria, used, &mut picks);
    used = performance_pick(&scored, criteria, used, &mut picks);
    trend_pick(&scored, criteria, used, &mut picks);
    picks
}

/// Best-scored vehicle whose price-value rating clears the floor, else the
/// overall best.
fn value_pick<'a>(
    scored: &[(&'a Vehicle, u32)],
    criteria: &FilterCriteria,
    mut used: BTreeSet<VehicleId>,
    picks: &mut Vec<StrategyPick>,
) -> BTreeSet<VehicleId> {
    let chosen = scored
        .iter()
        .find(|(vehicle, _)| vehicle.specs.price_value >= VALUE_SPEC_FLOOR)
        .or_else(|| scored.first());
    if let Some((vehicle, score)) = chosen {
        used.insert(vehicle.id.clone());
        picks.push(StrategyPick {
            kind: PickKind::Value,
            vehicle: (*vehicle).clone(),
            matched_lifestyles: criteria.matched_lifestyles(vehicle),
            score: *score,
        });
    }
    used
}

/// Remaining vehicle with the strongest design plus safety ratings.
fn performance_pick<'a>(
    scored: &[(&'a Vehicle, u32)],
    criteria: &FilterCriteria,
    mut used: BTreeSet<VehicleId>,
    picks: &mut Vec<StrategyPick>,
) -> BTreeSet<VehicleId> {
    let mut remaining: Vec<&(&Vehicle, u32)> = scored
        .iter()
        .filter(|(vehicle, _)| !used.contains(&vehicle.id))
        .collect();
    remaining.sort_by(|a, b| {
        let lhs = u32::from(a.0.specs.design) + u32::from(a.0.specs.safety);
        let rhs = u32::from(b.0.specs.design) + u32::from(b.0.specs.safety);
        rhs.cmp(&lhs)
    });
    if let Some((vehicle, score)) = remaining.first() {
        used.insert(vehicle.id.clone());
        picks.push(StrategyPick {
            kind: PickKind::Performance,
            vehicle: (*vehicle).clone(),
            matched_lifestyles: criteria.matched_lifestyles(vehicle),
            score: *score,
        });
    }
    used
}

/// Best remaining by score; labelled a lifestyle pick when the criteria's
/// lifestyle tags actually matched.
fn trend_pick<'a>(
    scored: &[(&'a Vehicle, u32)],
    criteria: &FilterCriteria,
    used: BTreeSet<VehicleId>,
    picks: &mut Vec<StrategyPick>,
) {
    let chosen = scored.iter().find(|(vehicle, _)| !used.contains(&vehicle.id));
    if let Some((vehicle, score)) = chosen {
        let matched = criteria.matched_lifestyles(vehicle);
        let kind = if matched.is_empty() { PickKind::Trend } else { PickKind::Lifestyle };
        picks.push(StrategyPick {
            kind,
            vehicle: (*vehicle).clone(),
            matched_lifestyles: matched,
            score: *score,
        });
    }
}
