use std::path::Path;

use carinsight_core::filter::{fallback_suggestions, filter};
use carinsight_core::labels::{
    brand_label, category_label, format_price, fuel_label, origin_label,
};
use carinsight_core::{SortKey, Vehicle};

use crate::commands::{context, criteria_from, CommandResult};
use crate::FilterArgs;

pub fn run(
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    filters: &FilterArgs,
    sort: SortKey,
) -> CommandResult {
    let ctx = match context("browse", config_path, catalog_path) {
        Ok(ctx) => ctx,
        Err(result) => return result,
    };
    let criteria = criteria_from(filters);

    let hits = filter(&ctx.catalog, &criteria, sort);
    let mut lines = Vec::new();

    if hits.is_empty() {
        lines.push("조건에 맞는 차량이 없습니다. 예산을 넓혀 다시 찾아봤어요:".to_string());
        let suggestions = fallback_suggestions(&ctx.catalog, &criteria);
        if suggestions.is_empty() {
            lines.push("  (대안도 찾지 못했습니다)".to_string());
        }
        for vehicle in suggestions {
            lines.push(render_line(vehicle));
        }
    } else {
        for vehicle in &hits {
            lines.push(render_line(vehicle));
        }
        lines.push(String::new());
        lines.push(format!("{}대 표시됨", hits.len()));
    }

    CommandResult::success(lines.join("\n"))
}

fn render_line(vehicle: &Vehicle) -> String {
    format!(
        "{:<16} {} {} · {}만 원 | {} | {} | {} [{}]",
        vehicle.id.0,
        brand_label(&vehicle.brand),
        vehicle.model,
        format_price(vehicle.price),
        fuel_label(vehicle.fuel_type),
        category_label(vehicle.category),
        vehicle.year,
        origin_label(vehicle.origin)
    )
}
