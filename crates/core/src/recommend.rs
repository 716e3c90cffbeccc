//! Chatbot recommendation pipeline: merge intent with the session filters,
//! score every vehicle with the assistant profile, keep anything over the
//! threshold and return the top three with their match facts.

use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::criteria::FilterCriteria;
use crate::domain::vehicle::Vehicle;
use crate::intent::Intent;
use crate::scoring::{assistant_score, EffectiveCriteria, MatchFact};

/// Scores at or below this value are never surfaced as recommendations.
pub const RECOMMENDATION_THRESHOLD: u32 = 20;
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Clone, Debug)]
pub struct Recommendation {
    pub vehicle: Vehicle,
    pub score: u32,
    pub facts: Vec<MatchFact>,
}

pub fn recommend(catalog: &Catalog, intent: &Intent, session: &FilterCriteria) -> Vec<Recommendation> {
    let effective = EffectiveCriteria::merge(intent, session);

    let mut candidates: Vec<Recommendation> = catalog
        .vehicles()
        .iter()
        .filter_map(|vehicle| {
            let (score, facts) = assistant_score(vehicle, intent, &effective);
            (score > RECOMMENDATION_THRESHOLD).then(|| Recommendation {
                vehicle: vehicle.clone(),
                score,
                facts,
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_RECOMMENDATIONS);
    debug!(count = candidates.len(), "recommendations computed");
    candidates
}
