use std::path::Path;

use carinsight_core::labels::{category_label, fuel_label};
use carinsight_store::load_catalog;

use crate::commands::{context, CommandResult};

/// Summarizes a catalog: record count plus the filter options derived from it.
pub fn run(
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    inspect_path: Option<&Path>,
) -> CommandResult {
    let catalog = if let Some(path) = inspect_path {
        match load_catalog(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                return CommandResult::failure("catalog", "catalog_load", error.to_string(), 4)
            }
        }
    } else {
        match context("catalog", config_path, catalog_path) {
            Ok(ctx) => ctx.catalog,
            Err(result) => return result,
        }
    };

    let groups = catalog.brand_groups();
    let categories: Vec<&str> =
        catalog.category_options().into_iter().map(category_label).collect();
    let fuels: Vec<&str> = catalog.fuel_options().into_iter().map(fuel_label).collect();

    let mut lines = vec![format!("차량 {}대", catalog.len())];
    lines.push(format!(
        "국산 브랜드: {}",
        groups.domestic.iter().map(|brand| brand.label.as_str()).collect::<Vec<_>>().join(", ")
    ));
    lines.push(format!(
        "수입 브랜드: {}",
        groups.imported.iter().map(|brand| brand.label.as_str()).collect::<Vec<_>>().join(", ")
    ));
    lines.push(format!("차종: {}", categories.join(", ")));
    lines.push(format!("연료: {}", fuels.join(", ")));
    lines.push(format!("라이프스타일 태그: {}", catalog.lifestyle_tags().join(", ")));

    CommandResult::success(lines.join("\n"))
}
