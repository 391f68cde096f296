use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::ConsoleState;
use crate::constants::{CONFIG_DIR, CONFIG_FILE, DEFAULT_LOG_FILE};
use crate::models::{Alert, Camera};
use crate::seed;

/// On-disk shape of `~/.camdeck/config.yaml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_file: Option<PathBuf>,
    cameras: Option<Vec<Camera>>,
    alerts: Option<Vec<Alert>>,
}

/// Startup configuration: where to log and what to seed the registries with
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub log_file: PathBuf,
    pub cameras: Vec<Camera>,
    pub alerts: Vec<Alert>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            cameras: seed::builtin_cameras(),
            alerts: seed::builtin_alerts(),
        }
    }
}

impl ConsoleConfig {
    /// Load from the default config directory in the user's home
    pub fn load() -> Result<Self> {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR);
        Self::load_from(&config_dir)
    }

    /// Load `config.yaml` from `dir`. A missing file yields the defaults.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file: ConfigFile = if content.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?
        };

        let defaults = Self::default();
        Ok(ConsoleConfig {
            log_file: file.log_file.unwrap_or(defaults.log_file),
            cameras: file.cameras.unwrap_or(defaults.cameras),
            alerts: file.alerts.unwrap_or(defaults.alerts),
        })
    }

    /// Seed the console state from this config
    pub fn into_state(self) -> Result<ConsoleState> {
        ConsoleState::from_seed(self.cameras, self.alerts).context("invalid seed data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CameraId, Severity};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = ConsoleConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.cameras.len(), 2);
        assert!(!config.alerts.is_empty());
    }

    #[test]
    fn test_yaml_seed_replaces_builtin_roster() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
log_file: /tmp/console.log
cameras:
  - id: 3
    name: Loading Dock
    feed: rtsp://10.0.0.3/live
  - id: 4
    name: Lobby
alerts:
  - id: 1
    severity: low
    title: Door held open
    camera_name: Lobby
    camera_id: 4
"#,
        )
        .unwrap();

        let config = ConsoleConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.log_file, PathBuf::from("/tmp/console.log"));
        assert_eq!(config.cameras[0].name, "Loading Dock");
        assert!(config.cameras[1].feed.resolve().is_err());
        assert_eq!(config.alerts[0].severity, Severity::Low);

        let state = config.into_state().unwrap();
        assert_eq!(state.selection().selected(), Some(CameraId(3)));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "log_file: other.log\n").unwrap();
        let config = ConsoleConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.log_file, PathBuf::from("other.log"));
        assert_eq!(config.cameras.len(), 2);
    }

    #[test]
    fn test_duplicate_camera_ids_fail_seeding() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "cameras:\n  - id: 1\n    name: A\n  - id: 1\n    name: B\n",
        )
        .unwrap();
        let config = ConsoleConfig::load_from(dir.path()).unwrap();
        assert!(config.into_state().is_err());
    }

    #[test]
    fn test_unknown_seed_record_keys_are_rejected() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "cameras:\n  - id: 1\n    name: Gate\n    feed_url: rtsp://gate\n",
        )
        .unwrap();
        let err = ConsoleConfig::load_from(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("feed_url"));

        fs::write(
            dir.path().join(CONFIG_FILE),
            "alerts:\n  - id: 1\n    severity: low\n    title: T\n    camera_name: Gate\n    camera: 1\n",
        )
        .unwrap();
        assert!(ConsoleConfig::load_from(dir.path()).is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "cameras: [ {id: one} ]\n").unwrap();
        assert!(ConsoleConfig::load_from(dir.path()).is_err());
    }
}
