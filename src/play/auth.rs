//! Service account authentication for the publisher API.

use crate::credentials::Credentials;
use crate::error::{ResumeError, Result};
use google_cloud_auth::credentials::CredentialsFile;
use google_cloud_auth::project::Config;
use google_cloud_auth::token::DefaultTokenSourceProvider;
use google_cloud_token::{TokenSource, TokenSourceProvider};
use serde_json::Value;
use std::sync::Arc;

/// OAuth scope granting access to the Android Publisher API
pub const ANDROID_PUBLISHER_SCOPE: &str = "https://www.googleapis.com/auth/androidpublisher";

const SCOPES: [&str; 1] = [ANDROID_PUBLISHER_SCOPE];

/// Build a token source scoped to the Android Publisher API.
///
/// Tokens are fetched lazily and cached by the returned source.
pub async fn authenticate(credentials: Credentials) -> Result<Arc<dyn TokenSource>> {
    let credentials_file: CredentialsFile =
        serde_json::from_value(Value::Object(credentials.into_json()))
            .map_err(|e| ResumeError::Authentication(format!("Invalid credentials: {}", e)))?;

    let config = Config::default().with_scopes(&SCOPES);
    let provider =
        DefaultTokenSourceProvider::new_with_credentials(config, Box::new(credentials_file))
            .await
            .map_err(|e| ResumeError::Authentication(e.to_string()))?;

    log::debug!("Token source ready for scope {}", ANDROID_PUBLISHER_SCOPE);
    Ok(provider.token_source())
}
