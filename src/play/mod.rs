//! Google Play Android Publisher integration.

mod auth;
mod client;
mod model;

pub use auth::{ANDROID_PUBLISHER_SCOPE, authenticate};
pub use client::{AndroidPublisherClient, DEFAULT_BASE_URL};
pub use model::{AppEdit, Release, ReleaseStatus, Track, VersionCode};

use crate::error::Result;
use async_trait::async_trait;

/// The four edit operations the resume workflow needs.
///
/// Implemented over HTTPS by [`AndroidPublisherClient`]; tests substitute a
/// recording fake.
#[async_trait]
pub trait PlayPublisher: Send + Sync {
    /// Open a new edit for the package
    async fn insert_edit(&self, package_name: &str) -> Result<AppEdit>;

    /// Read a track inside an edit
    async fn get_track(&self, package_name: &str, edit_id: &str, track: &str) -> Result<Track>;

    /// Replace a track's release list inside an edit
    async fn update_track(
        &self,
        package_name: &str,
        edit_id: &str,
        track: &str,
        body: &Track,
    ) -> Result<Track>;

    /// Commit the edit
    async fn commit_edit(&self, package_name: &str, edit_id: &str) -> Result<AppEdit>;
}
