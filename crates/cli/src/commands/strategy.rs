use std::path::Path;

use carinsight_core::labels::{brand_label, format_price};
use carinsight_core::select_strategies;

use crate::commands::{context, criteria_from, CommandResult};
use crate::FilterArgs;

pub fn run(
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    filters: &FilterArgs,
) -> CommandResult {
    let ctx = match context("strategy", config_path, catalog_path) {
        Ok(ctx) => ctx,
        Err(result) => return result,
    };
    let criteria = criteria_from(filters);

    let picks = select_strategies(&ctx.catalog, &criteria);
    if picks.is_empty() {
        return CommandResult::success("카탈로그가 비어 있어 추천할 차량이 없습니다.");
    }

    let mut lines = Vec::new();
    for pick in &picks {
        let vehicle = &pick.vehicle;
        lines.push(format!(
            "[{}] {} {} · {}만 원",
            pick.label(),
            brand_label(&vehicle.brand),
            vehicle.model,
            format_price(vehicle.price)
        ));
        lines.push(format!("  {}", pick.reason()));
        lines.push(String::new());
    }
    lines.pop();

    CommandResult::success(lines.join("\n"))
}
