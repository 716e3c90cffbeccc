pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod intent;
pub mod labels;
pub mod recommend;
pub mod scoring;
pub mod strategy;

pub use catalog::{BrandGroups, BrandOption, Catalog, RankingEntry};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::criteria::{BudgetRange, FilterCriteria, SortKey, DEFAULT_BUDGET};
pub use domain::vehicle::{BodyCategory, FuelType, Origin, QualitySpecs, Vehicle, VehicleId};
pub use errors::DomainError;
pub use intent::{Intent, IntentExtractor};
pub use recommend::{recommend, Recommendation, MAX_RECOMMENDATIONS, RECOMMENDATION_THRESHOLD};
pub use scoring::{assistant_score, strategy_score, EffectiveCriteria, MatchFact};
pub use strategy::{select_strategies, PickKind, StrategyPick};
