pub mod ask;
pub mod browse;
pub mod catalog;
pub mod chat;
pub mod liked;
pub mod ranking;
pub mod strategy;

use std::path::Path;

use carinsight_core::{
    AppConfig, BudgetRange, Catalog, ConfigOverrides, FilterCriteria, LoadOptions,
};
use carinsight_store::{default_catalog, load_catalog};

use crate::FilterArgs;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        Self { exit_code, output: format!("{command}: {error_class}: {}", message.into()) }
    }
}

/// Loaded config plus the catalog it points at. Every command starts here.
pub(crate) struct Context {
    pub config: AppConfig,
    pub catalog: Catalog,
}

pub(crate) fn context(
    command: &'static str,
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
) -> Result<Context, CommandResult> {
    let config = AppConfig::load(LoadOptions {
        config_path: config_path.map(Path::to_path_buf),
        require_file: config_path.is_some(),
        overrides: ConfigOverrides {
            catalog_path: catalog_path.map(Path::to_path_buf),
            ..ConfigOverrides::default()
        },
    })
    .map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            2,
        )
    })?;

    init_logging(&config);

    let catalog = match &config.catalog.path {
        Some(path) => load_catalog(path).map_err(|error| {
            CommandResult::failure(command, "catalog_load", error.to_string(), 4)
        })?,
        None => default_catalog(),
    };

    Ok(Context { config, catalog })
}

pub(crate) fn criteria_from(filters: &FilterArgs) -> FilterCriteria {
    FilterCriteria::new(BudgetRange::new(filters.budget_min, filters.budget_max))
        .with_fuel_types(filters.fuel_types.clone())
        .with_categories(filters.categories.clone())
        .with_lifestyles(filters.lifestyles.clone())
        .with_brands(filters.brands.clone())
}

fn init_logging(config: &AppConfig) {
    use carinsight_core::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    // try_init: a second command in the same process keeps the first subscriber
    let _ = match config.logging.format {
        Compact => tracing_subscriber::fmt()
            .with_target(false)
            .with_max_level(log_level)
            .compact()
            .try_init(),
        Pretty => tracing_subscriber::fmt()
            .with_target(false)
            .with_max_level(log_level)
            .pretty()
            .try_init(),
        Json => tracing_subscriber::fmt()
            .with_target(false)
            .with_max_level(log_level)
            .json()
            .try_init(),
    };
}
