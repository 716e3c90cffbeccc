use std::path::Path;

use carinsight_core::labels::{brand_label, format_price};
use carinsight_core::VehicleId;
use carinsight_store::{toggle as toggle_id, FileLikedStore, LikedStore};

use crate::commands::{context, CommandResult};

pub fn list(config_path: Option<&Path>, catalog_path: Option<&Path>) -> CommandResult {
    let ctx = match context("liked", config_path, catalog_path) {
        Ok(ctx) => ctx,
        Err(result) => return result,
    };
    let runtime = match build_runtime("liked") {
        Ok(runtime) => runtime,
        Err(result) => return result,
    };

    let store = FileLikedStore::new(ctx.config.storage.liked_path.clone());
    let ids = runtime.block_on(store.load());

    if ids.is_empty() {
        return CommandResult::success("찜한 차량이 없습니다.");
    }

    let lines: Vec<String> = ids
        .iter()
        .map(|id| match ctx.catalog.find(id) {
            Some(vehicle) => format!(
                "{:<16} {} {} · {}만 원",
                vehicle.id.0,
                brand_label(&vehicle.brand),
                vehicle.model,
                format_price(vehicle.price)
            ),
            // liked id no longer in the catalog; keep it visible
            None => format!("{:<16} (카탈로그에 없는 차량)", id.0),
        })
        .collect();
    CommandResult::success(lines.join("\n"))
}

pub fn toggle(
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    raw_id: &str,
) -> CommandResult {
    let ctx = match context("liked", config_path, catalog_path) {
        Ok(ctx) => ctx,
        Err(result) => return result,
    };

    let id = VehicleId(raw_id.to_string());
    if ctx.catalog.find(&id).is_none() {
        return CommandResult::failure(
            "liked",
            "unknown_vehicle",
            format!("`{raw_id}` is not in the catalog"),
            4,
        );
    }

    let runtime = match build_runtime("liked") {
        Ok(runtime) => runtime,
        Err(result) => return result,
    };

    let store = FileLikedStore::new(ctx.config.storage.liked_path.clone());
    let liked = runtime.block_on(async {
        let mut ids = store.load().await;
        let liked = toggle_id(&mut ids, &id);
        store.save(&ids).await;
        liked
    });

    if liked {
        CommandResult::success(format!("{raw_id} 찜 완료"))
    } else {
        CommandResult::success(format!("{raw_id} 찜 해제"))
    }
}

fn build_runtime(command: &'static str) -> Result<tokio::runtime::Runtime, CommandResult> {
    tokio::runtime::Builder::new_current_thread().enable_all().build().map_err(|error| {
        CommandResult::failure(
            command,
            "runtime_init",
            format!("failed to initialize async runtime: {error}"),
            3,
        )
    })
}
