//! Persisted liked-vehicle ids. Storage faults degrade to an empty set; the
//! browsing surface never blocks on a broken preferences file.

use std::collections::BTreeSet;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use carinsight_core::VehicleId;

/// Slot name recorded inside the envelope, kept stable across releases so
/// old files remain readable.
pub const LIKED_STORAGE_KEY: &str = "car-insight-liked";

#[async_trait]
pub trait LikedStore: Send + Sync {
    /// Reads the liked set; any read or parse failure yields an empty set.
    async fn load(&self) -> BTreeSet<VehicleId>;
    /// Persists the liked set; failures are logged and swallowed.
    async fn save(&self, ids: &BTreeSet<VehicleId>);
}

#[derive(Debug, Serialize, Deserialize)]
struct LikedEnvelope {
    key: String,
    updated_at: DateTime<Utc>,
    ids: BTreeSet<VehicleId>,
}

/// JSON-file backed store.
pub struct FileLikedStore {
    path: PathBuf,
}

impl FileLikedStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn decode(raw: &str) -> Option<BTreeSet<VehicleId>> {
        if let Ok(envelope) = serde_json::from_str::<LikedEnvelope>(raw) {
            return Some(envelope.ids);
        }
        // earlier versions wrote a bare id array
        serde_json::from_str::<BTreeSet<VehicleId>>(raw).ok()
    }
}

#[async_trait]
impl LikedStore for FileLikedStore {
    async fn load(&self) -> BTreeSet<VehicleId> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return BTreeSet::new(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "liked store unreadable");
                return BTreeSet::new();
            }
        };

        match Self::decode(&raw) {
            Some(ids) => ids,
            None => {
                warn!(path = %self.path.display(), "liked store corrupt, starting empty");
                BTreeSet::new()
            }
        }
    }

    async fn save(&self, ids: &BTreeSet<VehicleId>) {
        let envelope = LikedEnvelope {
            key: LIKED_STORAGE_KEY.to_string(),
            updated_at: Utc::now(),
            ids: ids.clone(),
        };
        let payload = match serde_json::to_string_pretty(&envelope) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%err, "liked set not serializable");
                return;
            }
        };
        if let Err(err) = tokio::fs::write(&self.path, payload).await {
            warn!(path = %self.path.display(), %err, "liked store write failed");
        }
    }
}

/// Flips one id's membership; returns whether the id is liked afterwards.
pub fn toggle(ids: &mut BTreeSet<VehicleId>, id: &VehicleId) -> bool {
    if ids.remove(id) {
        false
    } else {
        ids.insert(id.clone());
        true
    }
}
