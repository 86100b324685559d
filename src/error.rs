//! Error types for play_resume operations.
//!
//! Every failure path ends in a [`ResumeError`], whose `Display` output is the
//! single message reported to the operator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for play_resume operations
pub type Result<T> = std::result::Result<T, ResumeError>;

/// Main error type for all play_resume operations
#[derive(Error, Debug)]
pub enum ResumeError {
    /// Credential resolution errors
    #[error("{0}")]
    Credentials(#[from] CredentialsError),

    /// The remote service rejected the credentials
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Edit insert returned no usable identifier
    #[error("Failed to create edit")]
    EditCreationFailed,

    /// Requested version is absent from the track
    #[error("Release with version name {version} not found in track {track}")]
    ReleaseNotFound {
        /// Requested version name
        version: String,
        /// Track that was searched
        track: String,
    },

    /// Publisher API errors
    #[error("{0}")]
    Api(#[from] PlayApiError),
}

/// Credential resolution errors
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// None of the credential sources were supplied
    #[error(
        "Either google-account-json-file-path or google-account-json must be provided. You can also use GOOGLE_APPLICATION_CREDENTIALS environment variable (e.g., set by google-github-actions/auth)."
    )]
    Missing,

    /// Credential file could not be read
    #[error("Failed to read credentials file {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Credential content is not valid JSON
    #[error("Failed to parse credentials from {origin}: {source}")]
    Parse {
        /// Human readable description of where the content came from
        origin: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Credential content parsed but is not a JSON object
    #[error("Credentials from {origin} must be a JSON object")]
    NotAnObject {
        /// Human readable description of where the content came from
        origin: String,
    },
}

/// Google Play Android Publisher API errors
#[derive(Error, Debug)]
pub enum PlayApiError {
    /// Access token could not be obtained
    #[error("Failed to obtain access token for {operation}: {reason}")]
    Token {
        /// Operation that needed the token
        operation: &'static str,
        /// Reason for the error
        reason: String,
    },

    /// Transport level failure
    #[error("Request {operation} failed: {source}")]
    Http {
        /// Operation that failed
        operation: &'static str,
        /// Underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("Request {operation} failed with HTTP {status}: {message}")]
    Status {
        /// Operation that failed
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Message from the API error envelope, or the raw body
        message: String,
    },

    /// The configured API base URL cannot be used
    #[error("Invalid API base URL: {url}")]
    InvalidBaseUrl {
        /// Configured base URL
        url: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        /// Operation whose response was malformed
        operation: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl ResumeError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ResumeError::Credentials(CredentialsError::Missing) => vec![
                "Pass --google-account-json-file-path or --google-account-json".to_string(),
                "Or run google-github-actions/auth before this step".to_string(),
            ],
            ResumeError::Credentials(CredentialsError::Read { path, .. }) => vec![format!(
                "Check that {} exists and is readable",
                path.display()
            )],
            ResumeError::Credentials(CredentialsError::Parse { .. })
            | ResumeError::Credentials(CredentialsError::NotAnObject { .. }) => vec![
                "Use the JSON key file downloaded for the service account".to_string(),
            ],
            ResumeError::Authentication(_) => vec![
                "Verify the service account key has not been revoked".to_string(),
            ],
            ResumeError::ReleaseNotFound { track, .. } => vec![
                format!("List the releases in track '{}' in the Play Console", track),
                "Use the release name exactly as shown, not the version code".to_string(),
            ],
            ResumeError::Api(PlayApiError::Status { status: 401, .. })
            | ResumeError::Api(PlayApiError::Status { status: 403, .. }) => vec![
                "Grant the service account release permissions in the Play Console".to_string(),
            ],
            ResumeError::Api(PlayApiError::Status { status: 404, .. }) => vec![
                "Check the package name and track name".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}
