//! TOML catalog loading. The document is an array-of-tables under `vehicles`;
//! records are decoded one at a time so a single malformed entry drops with a
//! warning instead of poisoning the whole catalog.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, warn};

use carinsight_core::{Catalog, Vehicle};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.toml");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: std::path::PathBuf, source: std::io::Error },
    #[error("could not parse catalog document: {0}")]
    ParseDocument(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    vehicles: Vec<toml::Value>,
}

/// Loads a catalog from a TOML file on disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, StoreError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| StoreError::ReadFile { path: path.to_path_buf(), source })?;
    parse_catalog(&raw)
}

/// Decodes a catalog document. Malformed, invalid, or duplicate records are
/// dropped with a warning.
pub fn parse_catalog(raw: &str) -> Result<Catalog, StoreError> {
    let document: CatalogDocument = toml::from_str(raw)?;

    let mut seen = BTreeSet::new();
    let mut vehicles = Vec::with_capacity(document.vehicles.len());
    for (index, value) in document.vehicles.into_iter().enumerate() {
        let vehicle: Vehicle = match value.try_into() {
            Ok(vehicle) => vehicle,
            Err(err) => {
                warn!(index, %err, "dropping malformed catalog record");
                continue;
            }
        };
        if let Err(err) = vehicle.validate() {
            warn!(index, id = %vehicle.id.0, %err, "dropping invalid catalog record");
            continue;
        }
        if !seen.insert(vehicle.id.clone()) {
            warn!(index, id = %vehicle.id.0, "dropping duplicate catalog record");
            continue;
        }
        vehicles.push(vehicle);
    }

    Ok(Catalog::new(vehicles))
}

/// The catalog shipped with the binary. A parse failure here is a packaging
/// defect; it degrades to an empty catalog rather than aborting.
pub fn default_catalog() -> Catalog {
    match parse_catalog(BUNDLED_CATALOG) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(%err, "bundled catalog failed to parse");
            Catalog::new(Vec::new())
        }
    }
}
