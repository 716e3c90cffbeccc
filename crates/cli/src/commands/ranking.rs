use std::path::Path;

use crate::commands::{context, CommandResult};

pub fn run(config_path: Option<&Path>, catalog_path: Option<&Path>) -> CommandResult {
    let ctx = match context("ranking", config_path, catalog_path) {
        Ok(ctx) => ctx,
        Err(result) => return result,
    };

    let ranking = ctx.catalog.popularity_ranking();
    if ranking.is_empty() {
        return CommandResult::success("카탈로그가 비어 있어 랭킹을 만들 수 없습니다.");
    }

    let lines: Vec<String> = ranking
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {} ({})", index + 1, entry.name, entry.value))
        .collect();
    CommandResult::success(lines.join("\n"))
}
