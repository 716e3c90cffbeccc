//! Reply rendering: structured match facts in, Korean consultation text out.

use carinsight_core::labels::{brand_label, category_label, fuel_label, format_price, origin_label};
use carinsight_core::{recommend, Catalog, FilterCriteria, Intent, MatchFact, Recommendation};

const NO_MATCH_REPLY: &str = "말씀하신 조건에 정확히 맞는 차량을 찾지 못했습니다. \
예산, 브랜드, 연료 타입, 용도를 조금 더 알려주시면 다시 분석해 드리겠습니다.";

const CLOSING_LINE: &str = "더 궁금하신 점이 있으시면 편하게 질문해 주세요!";

/// Scores the catalog against the intent and renders the full reply text.
pub fn respond(catalog: &Catalog, intent: &Intent, session: &FilterCriteria) -> String {
    let recommendations = recommend(catalog, intent, session);
    build_reply(intent, &recommendations)
}

/// Renders the reply for an already-computed recommendation list.
pub fn build_reply(intent: &Intent, recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return NO_MATCH_REPLY.to_string();
    }

    let mut parts = Vec::new();

    let contexts = detected_contexts(intent);
    if contexts.is_empty() {
        parts.push("현재 설정된 필터 기준으로 분석한 결과입니다.".to_string());
    } else {
        parts.push(format!("{} 조건으로 분석한 결과입니다.", contexts.join(", ")));
    }
    parts.push(String::new());

    for (index, rec) in recommendations.iter().enumerate() {
        let vehicle = &rec.vehicle;
        parts.push(format!(
            "[{}순위] {} {} [{}]",
            index + 1,
            vehicle.brand,
            vehicle.model,
            origin_label(vehicle.origin)
        ));
        parts.push(format!(
            "  {}만 원 | {} | {}",
            format_price(vehicle.price),
            fuel_label(vehicle.fuel_type),
            vehicle.year
        ));
        parts.push(format!("  {}", match_reason(&rec.facts)));
        parts.push(String::new());
    }

    parts.push(CLOSING_LINE.to_string());
    parts.join("\n")
}

/// Echoes back which of the user's own words were understood, in a fixed
/// order: brands, lifestyles, fuels, then the price phrase. An exact price
/// suppresses the qualitative bucket label.
fn detected_contexts(intent: &Intent) -> Vec<String> {
    let mut contexts = Vec::new();

    if !intent.brands.is_empty() {
        let labels: Vec<&str> =
            intent.brands.iter().map(|brand| brand_label(brand)).collect();
        contexts.push(labels.join(", "));
    }
    if !intent.lifestyles.is_empty() {
        contexts.push(intent.lifestyles.join(", "));
    }
    if !intent.fuel_types.is_empty() {
        let labels: Vec<&str> = intent.fuel_types.iter().map(|fuel| fuel_label(*fuel)).collect();
        contexts.push(labels.join(", "));
    }
    if let Some(exact) = intent.exact_price {
        contexts.push(format!("{}만 원대", format_price(exact)));
    } else if let Some(range) = intent.budget_range {
        let bucket = if range.max <= 3500 {
            "합리적인 가격대"
        } else if range.min >= 7000 {
            "프리미엄 가격대"
        } else if range.min >= 5000 {
            "고급 가격대"
        } else {
            "중간 가격대"
        };
        contexts.push(bucket.to_string());
    }

    contexts
}

/// One-line justification built from the match facts. Fuel matches are only
/// cited when the user actually named a fuel.
pub fn match_reason(facts: &[MatchFact]) -> String {
    let mut reasons = Vec::new();

    for fact in facts {
        match fact {
            MatchFact::BudgetFit { price } => {
                reasons.push(format!("예산 범위 내 ({}만 원)", format_price(*price)));
            }
            MatchFact::FuelMatch { fuel, from_intent } => {
                if *from_intent {
                    reasons.push(format!("{} 차량", fuel_label(*fuel)));
                }
            }
            MatchFact::CategoryMatch { category } => {
                reasons.push(format!("{} 차종", category_label(*category)));
            }
            MatchFact::BrandMatch { brand } => {
                reasons.push(format!("{brand} 브랜드"));
            }
            MatchFact::LifestyleFit { tags } => {
                reasons.push(format!("{}에 적합", tags.join(", ")));
            }
        }
    }

    if reasons.is_empty() {
        "종합 점수 우수".to_string()
    } else {
        reasons.join(" | ")
    }
}
