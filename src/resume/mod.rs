//! Resume workflow: open an edit, flip the halted release, commit.

mod policy;

pub use policy::{locate_release, resumed_status, with_status};

use crate::error::{ResumeError, Result};
use crate::play::{PlayPublisher, ReleaseStatus, Track};

/// What to resume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRequest {
    /// Application package, e.g. `com.example.app`
    pub package_name: String,
    /// Release name to resume
    pub version_name: String,
    /// Track holding the release
    pub track: String,
}

/// Result of a successful resume
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeOutcome {
    /// Application package the release belongs to
    pub package_name: String,
    /// Track holding the release
    pub track: String,
    /// Edit that was committed
    pub edit_id: String,
    /// Name of the resumed release
    pub release_name: String,
    /// Status before the change
    pub previous_status: Option<ReleaseStatus>,
    /// Status written back
    pub new_status: ReleaseStatus,
    /// Staged rollout fraction, if any
    pub user_fraction: Option<f64>,
}

impl ResumeOutcome {
    /// One-line success summary naming the release, package and track
    pub fn summary(&self) -> String {
        format!(
            "Successfully resumed release {} of {} in track {}",
            self.release_name, self.package_name, self.track
        )
    }
}

/// Resume a halted release in a single edit.
///
/// Steps run strictly in order and the first failure aborts the rest. An edit
/// left open by a failure is not deleted; the API expires it.
pub async fn resume_release<P>(publisher: &P, request: &ResumeRequest) -> Result<ResumeOutcome>
where
    P: PlayPublisher + ?Sized,
{
    let ResumeRequest {
        package_name,
        version_name,
        track,
    } = request;

    log::info!("Creating edit...");
    let edit = publisher.insert_edit(package_name).await?;
    let edit_id = edit
        .id
        .filter(|id| !id.is_empty())
        .ok_or(ResumeError::EditCreationFailed)?;
    log::info!("Edit created with ID: {}", edit_id);

    log::info!("Getting track info for: {}", track);
    let current = publisher.get_track(package_name, &edit_id, track).await?;
    let releases = current.releases;
    log::info!("Found {} releases in track {}", releases.len(), track);

    let index = locate_release(&releases, version_name, track)?;
    let target = &releases[index];
    let previous_status = target.status.clone();
    log::info!("Found release: {}", target.name());
    log::info!(
        "Current status: {}",
        previous_status
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "not set".to_string())
    );

    let new_status = resumed_status(target);
    let user_fraction = target.user_fraction;
    log::info!(
        "user_fraction: {}, setting status to: {}",
        user_fraction
            .map(|f| f.to_string())
            .unwrap_or_else(|| "not set".to_string()),
        new_status
    );

    let body = Track {
        track: Some(track.clone()),
        releases: with_status(&releases, index, new_status.clone()),
    };

    log::info!(
        "Updating track {} to resume release {}...",
        track,
        version_name
    );
    publisher
        .update_track(package_name, &edit_id, track, &body)
        .await?;

    log::info!("Committing edit...");
    publisher.commit_edit(package_name, &edit_id).await?;

    let outcome = ResumeOutcome {
        package_name: package_name.clone(),
        track: track.clone(),
        edit_id,
        release_name: version_name.clone(),
        previous_status,
        new_status,
        user_fraction,
    };
    log::info!("{}", outcome.summary());
    Ok(outcome)
}
