//! HTTPS client for the Android Publisher v3 edits API.

use super::{AppEdit, PlayPublisher, Track};
use crate::error::{PlayApiError, Result};
use async_trait::async_trait;
use google_cloud_token::TokenSource;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Production endpoint of the Android Publisher API
pub const DEFAULT_BASE_URL: &str = "https://androidpublisher.googleapis.com/androidpublisher/v3";

/// Android Publisher client authenticated with a bearer token source
#[derive(Clone)]
pub struct AndroidPublisherClient {
    http: Client,
    base_url: String,
    token_source: Arc<dyn TokenSource>,
}

impl fmt::Debug for AndroidPublisherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndroidPublisherClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Google API error envelope
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl AndroidPublisherClient {
    /// Create a client against the production endpoint
    pub fn new(token_source: Arc<dyn TokenSource>) -> Self {
        Self::with_base_url(token_source, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(token_source: Arc<dyn TokenSource>, base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), token_source, base_url)
    }

    /// Create a client from a preconfigured reqwest client
    pub fn with_http_client(
        http: Client,
        token_source: Arc<dyn TokenSource>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token_source,
        }
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        endpoint_url(&self.base_url, segments).ok_or_else(|| {
            PlayApiError::InvalidBaseUrl {
                url: self.base_url.clone(),
            }
            .into()
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let token = self
            .token_source
            .token()
            .await
            .map_err(|e| PlayApiError::Token {
                operation,
                reason: e.to_string(),
            })?;

        let response = request
            .header(AUTHORIZATION, token)
            .send()
            .await
            .map_err(|source| PlayApiError::Http { operation, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| PlayApiError::Http { operation, source })?;

        if !status.is_success() {
            return Err(PlayApiError::Status {
                operation,
                status: status.as_u16(),
                message: error_message(&body),
            }
            .into());
        }

        let body = if body.trim().is_empty() { "{}" } else { &body };
        serde_json::from_str(body)
            .map_err(|source| PlayApiError::Decode { operation, source }.into())
    }
}

#[async_trait]
impl PlayPublisher for AndroidPublisherClient {
    async fn insert_edit(&self, package_name: &str) -> Result<AppEdit> {
        const OP: &str = "edits.insert";
        let url = self.endpoint(&["applications", package_name, "edits"])?;
        log::debug!("POST {}", url);
        self.send(OP, self.http.post(url).json(&serde_json::json!({})))
            .await
    }

    async fn get_track(&self, package_name: &str, edit_id: &str, track: &str) -> Result<Track> {
        const OP: &str = "edits.tracks.get";
        let url = self.endpoint(
            &["applications", package_name, "edits", edit_id, "tracks", track],
        )?;
        log::debug!("GET {}", url);
        self.send(OP, self.http.get(url)).await
    }

    async fn update_track(
        &self,
        package_name: &str,
        edit_id: &str,
        track: &str,
        body: &Track,
    ) -> Result<Track> {
        const OP: &str = "edits.tracks.update";
        let url = self.endpoint(
            &["applications", package_name, "edits", edit_id, "tracks", track],
        )?;
        log::debug!("PUT {}", url);
        self.send(OP, self.http.put(url).json(body)).await
    }

    async fn commit_edit(&self, package_name: &str, edit_id: &str) -> Result<AppEdit> {
        const OP: &str = "edits.commit";
        let commit = format!("{}:commit", edit_id);
        let url = self.endpoint(&["applications", package_name, "edits", &commit])?;
        log::debug!("POST {}", url);
        self.send(OP, self.http.post(url)).await
    }
}

/// Append percent-encoded path segments to the base URL
fn endpoint_url(base_url: &str, segments: &[&str]) -> Option<Url> {
    let mut url = Url::parse(base_url).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(segments);
    Some(url)
}

/// Extract the message from a Google error envelope, falling back to the raw body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) if !envelope.error.message.is_empty() => {
                format!("{} ({})", envelope.error.message, status)
            }
            Some(status) => status,
            None => envelope.error.message,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
