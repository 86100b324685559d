//! play_resume - resume a halted staged rollout on Google Play.
//!
//! Runs as a plain CLI or as a GitHub Actions step.

use play_resume::cli;
use std::process;

#[tokio::main]
async fn main() {
    // RUNNER_DEBUG is set when a workflow is re-run with debug logging.
    let default_filter = if std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1") {
        "info,play_resume=debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = cli::RuntimeConfig::from_env();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = config.output();
            output.error(&e.to_string());

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.println("\nRecovery suggestions:");
                for suggestion in suggestions {
                    let _ = output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
