//! Android Publisher v3 resources used by the resume workflow.
//!
//! Only the fields this tool reads are typed; everything else on a release
//! is kept in `extra` so records round-trip without loss.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Edit resource returned by `edits.insert`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEdit {
    /// Opaque edit identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Expiry as seconds since epoch, string encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time_seconds: Option<String>,
}

/// Track resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track name, e.g. `production`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    /// Releases in API order; absent or null is treated as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub releases: Vec<Release>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Release>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Release>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Release record inside a track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Release name, used as the lookup key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rollout status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReleaseStatus>,
    /// Version codes of the artifacts in this release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_codes: Option<Vec<VersionCode>>,
    /// Staged rollout fraction in (0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_fraction: Option<f64>,
    /// Fields this tool does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Release {
    /// Release name, or empty when unnamed
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Version codes, empty when absent
    pub fn version_codes(&self) -> &[VersionCode] {
        self.version_codes.as_deref().unwrap_or_default()
    }
}

/// A version code as sent by the API.
///
/// The API encodes int64 values as strings; plain numbers of any range are
/// accepted too and re-emitted in the same form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionCode {
    /// Numeric JSON value
    Number(Number),
    /// String encoded value
    Text(String),
}

impl fmt::Display for VersionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionCode::Number(n) => write!(f, "{}", n),
            VersionCode::Text(s) => f.write_str(s),
        }
    }
}

/// Release status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReleaseStatus {
    /// `statusUnspecified`
    Unspecified,
    /// `draft`
    Draft,
    /// `inProgress`
    InProgress,
    /// `halted`
    Halted,
    /// `completed`
    Completed,
    /// Any value this tool does not know, preserved verbatim
    Other(String),
}

impl ReleaseStatus {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            ReleaseStatus::Unspecified => "statusUnspecified",
            ReleaseStatus::Draft => "draft",
            ReleaseStatus::InProgress => "inProgress",
            ReleaseStatus::Halted => "halted",
            ReleaseStatus::Completed => "completed",
            ReleaseStatus::Other(s) => s,
        }
    }
}

impl From<String> for ReleaseStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "statusUnspecified" => ReleaseStatus::Unspecified,
            "draft" => ReleaseStatus::Draft,
            "inProgress" => ReleaseStatus::InProgress,
            "halted" => ReleaseStatus::Halted,
            "completed" => ReleaseStatus::Completed,
            _ => ReleaseStatus::Other(value),
        }
    }
}

impl From<ReleaseStatus> for String {
    fn from(value: ReleaseStatus) -> Self {
        match value {
            ReleaseStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_release_keeps_unknown_fields() {
        let raw = json!({
            "name": "1.0.0",
            "status": "halted",
            "versionCodes": ["42"],
            "releaseNotes": [{"language": "en-US", "text": "Fixes"}],
            "inAppUpdatePriority": 3
        });

        let release: Release = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(release.name(), "1.0.0");
        assert_eq!(release.status, Some(ReleaseStatus::Halted));
        assert_eq!(release.version_codes()[0].to_string(), "42");
        assert_eq!(release.extra.len(), 2);

        assert_eq!(serde_json::to_value(&release).unwrap(), raw);
    }

    #[test]
    fn test_unknown_status_preserved() {
        let release: Release =
            serde_json::from_value(json!({"name": "1", "status": "someFutureState"})).unwrap();
        assert_eq!(
            release.status,
            Some(ReleaseStatus::Other("someFutureState".to_string()))
        );
        assert_eq!(
            serde_json::to_value(&release).unwrap(),
            json!({"name": "1", "status": "someFutureState"})
        );
    }

    #[test]
    fn test_track_without_releases() {
        let track: Track = serde_json::from_value(json!({"track": "beta"})).unwrap();
        assert_eq!(track.track.as_deref(), Some("beta"));
        assert!(track.releases.is_empty());
    }

    #[test]
    fn test_track_with_null_releases() {
        let track: Track =
            serde_json::from_value(json!({"track": "production", "releases": null})).unwrap();
        assert_eq!(track.track.as_deref(), Some("production"));
        assert!(track.releases.is_empty());
    }

    #[test]
    fn test_numeric_version_codes() {
        let release: Release =
            serde_json::from_value(json!({"name": "1", "versionCodes": [1, 2]})).unwrap();
        assert_eq!(
            release.version_codes(),
            &[VersionCode::Number(1.into()), VersionCode::Number(2.into())]
        );
    }

    #[test]
    fn test_version_codes_beyond_i64_pass_through() {
        let raw = json!({"name": "1", "versionCodes": [9999999999999999999u64, "12"]});
        let release: Release = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(release.version_codes()[0].to_string(), "9999999999999999999");
        assert_eq!(serde_json::to_value(&release).unwrap(), raw);
    }
}
