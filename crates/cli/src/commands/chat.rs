use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use carinsight_assistant::AssistantSession;

use crate::commands::{context, criteria_from, CommandResult};
use crate::FilterArgs;

/// Interactive loop over stdin. Ends on EOF or `exit`.
pub fn run(
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
    filters: &FilterArgs,
) -> CommandResult {
    let ctx = match context("chat", config_path, catalog_path) {
        Ok(ctx) => ctx,
        Err(result) => return result,
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "chat",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let delay = Duration::from_millis(ctx.config.assistant.thinking_delay_ms);
    let session =
        AssistantSession::new(ctx.catalog, criteria_from(filters)).with_thinking_delay(delay);

    let outcome = runtime.block_on(async {
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        stdout.write_all(session.greeting().as_bytes()).await?;
        stdout
            .write_all(format!("\n\n바로가기: {}\n\n> ", session.quick_actions().join(" | ")).as_bytes())
            .await?;
        stdout.flush().await?;

        while let Some(line) = lines.next_line().await? {
            let message = line.trim();
            if message.is_empty() {
                stdout.write_all(b"> ").await?;
                stdout.flush().await?;
                continue;
            }
            if message == "exit" || message == "quit" {
                break;
            }

            let reply = session.send(message).await;
            stdout.write_all(format!("\n{reply}\n\n> ").as_bytes()).await?;
            stdout.flush().await?;
        }

        Ok::<(), std::io::Error>(())
    });

    match outcome {
        Ok(()) => CommandResult::success("상담을 종료합니다. 안녕히 가세요!"),
        Err(error) => CommandResult::failure("chat", "io", error.to_string(), 5),
    }
}
