//! Service account credential resolution.
//!
//! Three sources may supply the key, checked in a fixed priority order:
//! the ambient `GOOGLE_APPLICATION_CREDENTIALS` path, inline JSON, then an
//! explicit file path. Only the selected source is ever read.

use crate::error::{CredentialsError, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the ambient credential file path
pub const APPLICATION_CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Candidate credential sources, all optional
#[derive(Debug, Clone, Default)]
pub struct CredentialSources {
    /// Path from `GOOGLE_APPLICATION_CREDENTIALS`
    pub application_credentials: Option<String>,
    /// Inline service account JSON
    pub account_json: Option<String>,
    /// Path to a service account JSON file
    pub account_json_file: Option<String>,
}

/// Which source supplied the credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// `GOOGLE_APPLICATION_CREDENTIALS` file
    ApplicationDefault(PathBuf),
    /// `google-account-json` input
    InlineJson,
    /// `google-account-json-file-path` input
    JsonFile(PathBuf),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::ApplicationDefault(path) => {
                write!(f, "{} ({})", APPLICATION_CREDENTIALS_ENV, path.display())
            }
            CredentialSource::InlineJson => write!(f, "google-account-json"),
            CredentialSource::JsonFile(path) => {
                write!(f, "google-account-json-file-path ({})", path.display())
            }
        }
    }
}

/// Parsed credential blob, opaque to everything but the authenticator
#[derive(Clone)]
pub struct Credentials {
    source: CredentialSource,
    json: Map<String, Value>,
}

// Key material must never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("source", &self.source)
            .field("type", &self.json.get("type"))
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Source the credentials were loaded from
    pub fn source(&self) -> &CredentialSource {
        &self.source
    }

    /// Parsed JSON object
    pub fn json(&self) -> &Map<String, Value> {
        &self.json
    }

    /// Consume into the parsed JSON object
    pub fn into_json(self) -> Map<String, Value> {
        self.json
    }
}

impl CredentialSources {
    /// Build sources, treating empty strings as absent
    pub fn new(
        application_credentials: Option<String>,
        account_json: Option<String>,
        account_json_file: Option<String>,
    ) -> Self {
        Self {
            application_credentials: non_empty(application_credentials),
            account_json: non_empty(account_json),
            account_json_file: non_empty(account_json_file),
        }
    }

    /// Pick the highest-priority source without reading anything
    pub fn select(&self) -> std::result::Result<CredentialSource, CredentialsError> {
        if let Some(path) = present(&self.application_credentials) {
            Ok(CredentialSource::ApplicationDefault(PathBuf::from(path)))
        } else if present(&self.account_json).is_some() {
            Ok(CredentialSource::InlineJson)
        } else if let Some(path) = present(&self.account_json_file) {
            Ok(CredentialSource::JsonFile(PathBuf::from(path)))
        } else {
            Err(CredentialsError::Missing)
        }
    }

    /// Resolve and parse the credentials from the selected source
    pub fn resolve(&self) -> Result<Credentials> {
        let source = self.select()?;

        let json = match &source {
            CredentialSource::ApplicationDefault(path) => {
                log::info!(
                    "Using {} for authentication: {}",
                    APPLICATION_CREDENTIALS_ENV,
                    path.display()
                );
                parse_object(&read_file(path)?, &source)?
            }
            CredentialSource::InlineJson => {
                log::info!("Using google-account-json for authentication");
                let inline = self.account_json.as_deref().unwrap_or_default();
                parse_object(inline, &source)?
            }
            CredentialSource::JsonFile(path) => {
                log::info!(
                    "Using google-account-json-file-path for authentication: {}",
                    path.display()
                );
                parse_object(&read_file(path)?, &source)?
            }
        };

        Ok(Credentials { source, json })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn read_file(path: &Path) -> std::result::Result<String, CredentialsError> {
    std::fs::read_to_string(path).map_err(|source| CredentialsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_object(
    content: &str,
    source: &CredentialSource,
) -> std::result::Result<Map<String, Value>, CredentialsError> {
    let value: Value = serde_json::from_str(content).map_err(|e| CredentialsError::Parse {
        origin: source.to_string(),
        source: e,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CredentialsError::NotAnObject {
            origin: source.to_string(),
        }),
    }
}
