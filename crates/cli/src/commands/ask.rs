use std::path::Path;

use carinsight_assistant::AssistantSession;

use crate::commands::{context, criteria_from, CommandResult};
use crate::FilterArgs;

/// One-shot question: no greeting, no thinking delay, just the reply.
pub fn run(
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    filters: &FilterArgs,
    message: &str,
) -> CommandResult {
    let ctx = match context("ask", config_path, catalog_path) {
        Ok(ctx) => ctx,
        Err(result) => return result,
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "ask",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let session = AssistantSession::new(ctx.catalog, criteria_from(filters));
    let reply = runtime.block_on(session.send(message));
    CommandResult::success(reply)
}
