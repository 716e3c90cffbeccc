use std::process::ExitCode;

fn main() -> ExitCode {
    carinsight_cli::run()
}
