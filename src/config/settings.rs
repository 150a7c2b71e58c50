use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// User settings, stored as JSON in the config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Scripts
    /// Where `run_named` looks for `<name>.rhai`
    pub scripts_dir: Option<PathBuf>,
    pub max_operations: u64,
    pub max_expr_depth: usize,

    // Editing
    /// Select the new text after `npp::editor::replace`
    pub select_after_replace: bool,

    // Logging
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scripts_dir: None,
            max_operations: 1_000_000,
            max_expr_depth: 64,

            select_after_replace: true,

            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("npp-script"))
    }

    /// Get the default settings file path
    pub fn settings_file() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// Load the default settings file, falling back to defaults
    pub fn load() -> Self {
        match Self::settings_file() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load the default settings file, reporting an unreadable or invalid one
    pub fn try_load() -> Result<Self> {
        match Self::settings_file() {
            Some(path) => Self::try_load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `path`. A missing file gives the defaults.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Like [`Settings::try_load_from`], but an unreadable or invalid file
    /// gives the defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using default settings");
            Self::default()
        })
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Configured scripts directory, or `<config_dir>/scripts`
    pub fn scripts_dir(&self) -> Option<PathBuf> {
        self.scripts_dir
            .clone()
            .or_else(|| Self::config_dir().map(|p| p.join("scripts")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::new();
        assert_eq!(settings.max_operations, 1_000_000);
        assert_eq!(settings.max_expr_depth, 64);
        assert!(settings.select_after_replace);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            scripts_dir: Some(PathBuf::from("/opt/scripts")),
            select_after_replace: false,
            log_filter: "npp_script=debug".to_string(),
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "max_operations": 5 }"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.max_operations, 5);
        assert!(settings.select_after_replace);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
        assert_eq!(Settings::load_from(&dir.path().join("absent.json")), Settings::default());
    }

    #[test]
    fn try_load_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ broken").unwrap();

        assert!(matches!(
            Settings::try_load_from(&path),
            Err(crate::Error::Settings(_))
        ));
        assert_eq!(
            Settings::try_load_from(&dir.path().join("absent.json")).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn explicit_scripts_dir_wins() {
        let settings = Settings {
            scripts_dir: Some(PathBuf::from("/tmp/s")),
            ..Settings::default()
        };
        assert_eq!(settings.scripts_dir(), Some(PathBuf::from("/tmp/s")));
    }
}
