use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

/// Stable camera identity for the session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CameraId(pub u32);

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Alert identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub u32);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque image or feed reference (path or URL)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        AssetRef(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the reference for display. Blank references are missing.
    pub fn resolve(&self) -> ConsoleResult<&str> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            Err(ConsoleError::MissingAsset(self.0.clone()))
        } else {
            Ok(trimmed)
        }
    }
}

impl From<&str> for AssetRef {
    fn from(s: &str) -> Self {
        AssetRef::new(s)
    }
}

/// A camera known to the console
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Camera {
    pub id: CameraId,
    pub name: String,
    #[serde(default)]
    pub thumbnail: AssetRef,
    #[serde(default)]
    pub feed: AssetRef,
}

impl Camera {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        thumbnail: impl Into<String>,
        feed: impl Into<String>,
    ) -> Self {
        Camera {
            id: CameraId(id),
            name: name.into(),
            thumbnail: AssetRef::new(thumbnail),
            feed: AssetRef::new(feed),
        }
    }
}

/// Alert severity class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

/// An alert raised against a camera. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Alert {
    pub id: AlertId,
    pub severity: Severity,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub camera_name: String,
    /// Source camera, when the alert producer reported one
    #[serde(default)]
    pub camera_id: Option<CameraId>,
    /// Elapsed/clip time label shown on the player
    #[serde(default)]
    pub time_label: String,
    #[serde(default)]
    pub clip: Option<AssetRef>,
    #[serde(default)]
    pub raised_at: Option<DateTime<Utc>>,
}

/// Field values collected by the add-camera form
#[derive(Clone, PartialEq, Default)]
pub struct NewCamera {
    pub name: String,
    pub notes: String,
    pub username: String,
    pub password: String,
    pub service_url: String,
    pub live_stream_url: String,
}

// Hand-written so the password never reaches the log file.
impl fmt::Debug for NewCamera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewCamera")
            .field("name", &self.name)
            .field("notes", &self.notes)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("service_url", &self.service_url)
            .field("live_stream_url", &self.live_stream_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_asset_is_missing() {
        assert!(matches!(
            AssetRef::new("   ").resolve(),
            Err(ConsoleError::MissingAsset(_))
        ));
        assert_eq!(AssetRef::new(" /feed.png ").resolve(), Ok("/feed.png"));
    }

    #[test]
    fn test_new_camera_debug_hides_password() {
        let form = NewCamera {
            name: "Gate".into(),
            password: "hunter2".into(),
            ..Default::default()
        };
        let printed = format!("{:?}", form);
        assert!(printed.contains("Gate"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_alert_deserializes_with_defaults() {
        let yaml = "id: 7\nseverity: medium\ntitle: Loitering\ncamera_name: Camera 02\n";
        let alert: Alert = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(alert.id, AlertId(7));
        assert_eq!(alert.severity, Severity::Medium);
        assert!(alert.camera_id.is_none());
        assert!(alert.clip.is_none());
    }
}
