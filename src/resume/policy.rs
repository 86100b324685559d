//! Release lookup and the halted → resumed status decision.

use crate::error::{ResumeError, Result};
use crate::play::{Release, ReleaseStatus};

/// Find the release named `version_name`.
///
/// Returns the index of the first exact match. Duplicate names are not an
/// error; only the first one is resumed and a warning is logged.
pub fn locate_release(releases: &[Release], version_name: &str, track: &str) -> Result<usize> {
    let mut found = None;
    let mut matches = 0usize;

    for (index, release) in releases.iter().enumerate() {
        let codes = release
            .version_codes()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        log::debug!(
            "Checking release with version codes: {}",
            codes.join(", ")
        );

        if release.name.as_deref() == Some(version_name) {
            matches += 1;
            if found.is_none() {
                found = Some(index);
            }
        }
    }

    if matches > 1 {
        log::warn!(
            "Track {} has {} releases named {}; resuming the first one",
            track,
            matches,
            version_name
        );
    }

    found.ok_or_else(|| ResumeError::ReleaseNotFound {
        version: version_name.to_string(),
        track: track.to_string(),
    })
}

/// Status a halted release moves to when resumed.
///
/// A positive `userFraction` means the staged rollout continues; anything
/// else (absent, zero, NaN) completes the rollout.
pub fn resumed_status(release: &Release) -> ReleaseStatus {
    match release.user_fraction {
        Some(fraction) if fraction > 0.0 => ReleaseStatus::InProgress,
        _ => ReleaseStatus::Completed,
    }
}

/// Copy of `releases` with only the release at `index` set to `status`
pub fn with_status(releases: &[Release], index: usize, status: ReleaseStatus) -> Vec<Release> {
    releases
        .iter()
        .enumerate()
        .map(|(i, release)| {
            if i == index {
                Release {
                    status: Some(status.clone()),
                    ..release.clone()
                }
            } else {
                release.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::VersionCode;

    fn release(name: &str, fraction: Option<f64>) -> Release {
        Release {
            name: Some(name.to_string()),
            status: Some(ReleaseStatus::Halted),
            version_codes: Some(vec![VersionCode::Number(1.into())]),
            user_fraction: fraction,
            ..Default::default()
        }
    }

    #[test]
    fn test_positive_fraction_stays_in_progress() {
        assert_eq!(
            resumed_status(&release("1.0.0", Some(0.1))),
            ReleaseStatus::InProgress
        );
    }

    #[test]
    fn test_no_fraction_completes() {
        assert_eq!(
            resumed_status(&release("1.0.0", None)),
            ReleaseStatus::Completed
        );
    }

    #[test]
    fn test_zero_or_nan_fraction_completes() {
        assert_eq!(
            resumed_status(&release("1.0.0", Some(0.0))),
            ReleaseStatus::Completed
        );
        assert_eq!(
            resumed_status(&release("1.0.0", Some(f64::NAN))),
            ReleaseStatus::Completed
        );
    }

    #[test]
    fn test_locate_exact_match() {
        let releases = vec![release("1.0", None), release("1.0.0", None)];
        assert_eq!(locate_release(&releases, "1.0.0", "production").unwrap(), 1);
    }

    #[test]
    fn test_locate_first_of_duplicates() {
        let releases = vec![
            release("0.9.0", None),
            release("1.0.0", Some(0.5)),
            release("1.0.0", None),
        ];
        assert_eq!(locate_release(&releases, "1.0.0", "production").unwrap(), 1);
    }

    #[test]
    fn test_locate_not_found() {
        let releases = vec![release("0.9.0", None)];
        let err = locate_release(&releases, "1.0.0", "beta").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Release with version name 1.0.0 not found in track beta"
        );
    }

    #[test]
    fn test_locate_in_empty_track() {
        assert!(locate_release(&[], "1.0.0", "production").is_err());
    }

    #[test]
    fn test_with_status_touches_only_index() {
        let releases = vec![
            release("1.0.0", None),
            release("1.0.0", None),
            release("2.0.0", Some(0.2)),
        ];
        let updated = with_status(&releases, 0, ReleaseStatus::Completed);

        assert_eq!(updated[0].status, Some(ReleaseStatus::Completed));
        assert_eq!(updated[1], releases[1]);
        assert_eq!(updated[2], releases[2]);
    }
}
