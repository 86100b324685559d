//! Command line argument parsing.
//!
//! Every input can also come from the environment. The `INPUT_*` names are
//! the variables GitHub Actions sets for step inputs, so the binary works
//! unchanged as an action.

use crate::credentials::{APPLICATION_CREDENTIALS_ENV, CredentialSources};
use crate::resume::ResumeRequest;
use clap::Parser;

/// Resume a halted staged rollout on Google Play
#[derive(Parser, Debug, Clone)]
#[command(
    name = "play_resume",
    version,
    about = "Resume a halted staged rollout on Google Play",
    long_about = "Resume a halted staged rollout of an Android release on Google Play.

The release named by --version-name is moved from halted back to inProgress
when it has a userFraction, or to completed otherwise, and the change is
committed in a single edit.

Usage:
  play_resume --package-name com.example.app --version-name 1.2.3 \\
              --google-account-json-file-path key.json
  play_resume --package-name com.example.app --version-name 1.2.3 --track beta"
)]
pub struct Args {
    /// Application package name, e.g. com.example.app
    #[arg(long, env = "INPUT_PACKAGE-NAME", value_name = "PACKAGE")]
    pub package_name: String,

    /// Name of the halted release to resume
    #[arg(long, env = "INPUT_VERSION-NAME", value_name = "VERSION")]
    pub version_name: String,

    /// Path to a service account JSON key
    #[arg(long, env = "INPUT_GOOGLE-ACCOUNT-JSON-FILE-PATH", value_name = "PATH")]
    pub google_account_json_file_path: Option<String>,

    /// Service account JSON key content
    #[arg(
        long,
        env = "INPUT_GOOGLE-ACCOUNT-JSON",
        value_name = "JSON",
        hide_env_values = true
    )]
    pub google_account_json: Option<String>,

    /// Track holding the release
    #[arg(long, env = "INPUT_TRACK", default_value = "production")]
    pub track: String,

    /// Application default credentials path; takes priority over both key inputs
    #[arg(long, env = APPLICATION_CREDENTIALS_ENV, value_name = "PATH")]
    pub application_credentials: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Credential sources in priority order
    pub fn credential_sources(&self) -> CredentialSources {
        CredentialSources::new(
            self.application_credentials.clone(),
            self.google_account_json.clone(),
            self.google_account_json_file_path.clone(),
        )
    }

    /// Release to resume
    pub fn request(&self) -> ResumeRequest {
        ResumeRequest {
            package_name: self.package_name.clone(),
            version_name: self.version_name.clone(),
            track: self.track.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "play_resume",
            "--package-name",
            "com.example.app",
            "--version-name",
            "1.0.0",
            "--google-account-json",
            "{}",
            "--track",
            "beta",
        ])
        .unwrap();

        assert_eq!(
            args.request(),
            ResumeRequest {
                package_name: "com.example.app".to_string(),
                version_name: "1.0.0".to_string(),
                track: "beta".to_string(),
            }
        );
        assert_eq!(
            args.credential_sources().account_json.as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn test_empty_key_inputs_are_absent() {
        let args = Args::try_parse_from([
            "play_resume",
            "--package-name",
            "com.example.app",
            "--version-name",
            "1.0.0",
            "--google-account-json",
            "",
            "--google-account-json-file-path",
            "",
        ])
        .unwrap();

        let sources = args.credential_sources();
        assert!(sources.account_json.is_none());
        assert!(sources.account_json_file.is_none());
    }

    #[test]
    fn test_package_name_required() {
        assert!(Args::try_parse_from(["play_resume", "--version-name", "1.0.0"]).is_err());
    }
}
