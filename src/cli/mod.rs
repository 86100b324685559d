//! Command line interface for play_resume.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::error::Result;
use crate::play::{self, AndroidPublisherClient};
use crate::resume::{ResumeOutcome, resume_release};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let config = RuntimeConfig::from_env();
    execute(&args, &config).await
}

/// Resolve credentials, authenticate and resume the release
pub async fn execute(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    log::info!("Package name: {}", args.package_name);
    log::info!("Version name: {}", args.version_name);
    log::info!("Track: {}", args.track);

    let credentials = args.credential_sources().resolve()?;
    let token_source = play::authenticate(credentials).await?;
    let client = AndroidPublisherClient::new(token_source);

    let outcome = resume_release(&client, &args.request()).await?;
    report_success(config, &outcome);
    Ok(0)
}

fn report_success(config: &RuntimeConfig, outcome: &ResumeOutcome) {
    let _ = config.output().success(&format!(
        "{} ({} -> {})",
        outcome.summary(),
        outcome
            .previous_status
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "unset".to_string()),
        outcome.new_status
    ));
}

/// Whether the process runs as a GitHub Actions step
pub fn running_in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Configuration derived from the environment
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(annotations: bool) -> Self {
        Self {
            output: OutputManager::new(annotations),
        }
    }

    /// Detect GitHub Actions from the environment
    pub fn from_env() -> Self {
        Self::new(running_in_github_actions())
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &OutputManager {
        &self.output
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
