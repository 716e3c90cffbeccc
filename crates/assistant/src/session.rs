//! One chat session: fixed greeting, quick-action shortcuts and the session's
//! active filter criteria, which the user's browsing surface may update
//! between messages.

use std::time::Duration;

use tracing::debug;

use carinsight_core::{Catalog, FilterCriteria, Intent, IntentExtractor};

use crate::reply;

/// Opening message shown before the first user input.
pub const GREETING: &str = "안녕하세요! CarInsight AI 상담사입니다.\n\n국산/수입 모든 차량을 분석해 드립니다.\n아래와 같이 질문해 보세요:\n\n- \"출퇴근용 SUV 추천해줘\"\n- \"BMW 5천만 원대 추천\"\n- \"독일차 럭셔리 세단\"\n- \"테슬라 vs 아이오닉5\"\n- \"가족용 수입 SUV\"\n- \"3천만 원대 하이브리드\"\n\n예산, 브랜드, 연료, 라이프스타일을 조합할수록\n정확한 추천을 받으실 수 있어요!";

/// Canned prompts offered as one-tap shortcuts.
pub const QUICK_ACTIONS: &[&str] =
    &["출퇴근용 추천", "수입 SUV", "전기차 추천", "독일차 세단", "가성비 국산", "럭셔리 추천"];

pub struct AssistantSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    extractor: IntentExtractor,
    thinking_delay: Duration,
}

impl AssistantSession {
    pub fn new(catalog: Catalog, criteria: FilterCriteria) -> Self {
        Self {
            catalog,
            criteria,
            extractor: IntentExtractor::new(),
            thinking_delay: Duration::ZERO,
        }
    }

    /// Pause inserted before each reply to pace the conversation.
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    pub fn quick_actions(&self) -> &'static [&'static str] {
        QUICK_ACTIONS
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the session filters, e.g. after the user adjusted the
    /// browsing surface.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Reads one user message and produces the full consultation reply.
    pub async fn send(&self, message: &str) -> String {
        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }

        let intent = self.extract(message);
        reply::respond(&self.catalog, &intent, &self.criteria)
    }

    pub fn extract(&self, message: &str) -> Intent {
        let intent = self.extractor.extract(message);
        debug!(
            lifestyles = intent.lifestyles.len(),
            brands = intent.brands.len(),
            exact_price = ?intent.exact_price,
            "intent extracted"
        );
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carinsight_core::{
        BodyCategory, BudgetRange, FuelType, Origin, QualitySpecs, Vehicle, VehicleId,
    };

    fn catalog() -> Catalog {
        Catalog::new(vec![Vehicle {
            id: VehicleId("ioniq5".to_string()),
            brand: "HYUNDAI".to_string(),
            model: "아이오닉5".to_string(),
            price: 5200,
            view_count: Some(1870),
            fuel_type: FuelType::Electric,
            category: BodyCategory::Suv,
            year: 2024,
            image: String::new(),
            tags: Vec::new(),
            lifestyles: vec!["출퇴근용".to_string()],
            origin: Origin::Domestic,
            specs: QualitySpecs {
                price_value: 78,
                fuel_economy: 95,
                design: 88,
                space: 85,
                safety: 86,
            },
            ai_comment: "전기차 전환을 고민 중이라면 가장 균형 잡힌 선택지입니다.".to_string(),
        }])
    }

    fn session() -> AssistantSession {
        AssistantSession::new(catalog(), FilterCriteria::new(BudgetRange { min: 0, max: 10_000 }))
    }

    #[tokio::test]
    async fn electric_query_recommends_the_ev() {
        let reply = session().send("전기차 추천").await;
        assert!(reply.contains("[1순위] HYUNDAI 아이오닉5 [국산]"));
        assert!(reply.contains("전기차 차량"));
    }

    #[tokio::test]
    async fn unmatched_conditions_yield_the_apology() {
        let mut session = session();
        session.set_criteria(FilterCriteria::new(BudgetRange { min: 100, max: 200 }));
        let reply = session.send("디젤 트럭").await;
        assert!(reply.starts_with("말씀하신 조건에 정확히 맞는 차량을 찾지 못했습니다."));
    }

    #[test]
    fn greeting_and_quick_actions_are_stable() {
        let session = session();
        assert!(session.greeting().starts_with("안녕하세요! CarInsight AI 상담사입니다."));
        assert_eq!(session.quick_actions().len(), 6);
    }
}
