//! Catalog and preference storage.
//!
//! Two concerns live here, both feeding `carinsight-core`:
//! - `catalog_file`: loading vehicle records from a TOML fixture, including
//!   the bundled default catalog
//! - `liked`: the persisted set of liked vehicle ids
//!
//! I/O failures never reach the engine. A broken catalog record is dropped
//! with a warning and a broken liked file reads as an empty set.

pub mod catalog_file;
pub mod liked;

pub use catalog_file::{default_catalog, load_catalog, parse_catalog, StoreError};
pub use liked::{toggle, FileLikedStore, LikedStore, LIKED_STORAGE_KEY};
