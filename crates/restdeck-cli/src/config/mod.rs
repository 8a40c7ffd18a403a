//! Configuration management for the restdeck CLI.
//!
//! Settings live in a TOML file under the user's `.restdeck` folder; a
//! missing or unreadable file falls back to defaults so the app always
//! starts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use restdeck_api::DEFAULT_BASE_URL;

use crate::ui::theme::Theme;

/// Name of the dot-folder holding config and logs.
const DECK_FOLDER: &str = ".restdeck";

/// Main configuration for restdeck.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote collection API.
    pub base_url: String,
    /// Color theme for the TUI.
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the given path, or from
    /// `~/.restdeck/config.toml` when none is given. Any missing or invalid
    /// file yields the defaults.
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
            return Self::default();
        };
        let Ok(text) = fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&text).unwrap_or_else(|err| {
            tracing::warn!("ignoring invalid config at {}: {err}", path.display());
            Self::default()
        })
    }
}

/// The user's restdeck dot-folder, if a home directory resolves.
#[must_use]
pub fn deck_folder() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DECK_FOLDER))
}

/// Default config file path under the deck folder.
fn default_config_path() -> Option<PathBuf> {
    deck_folder().map(|folder| folder.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("nope.toml");

        let config = Config::load_or_default(Some(&path));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_reads_overrides() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "base_url = \"http://localhost:3000\"\n").expect("Failed to write config");

        let config = Config::load_or_default(Some(&path));
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.theme, Theme::default(), "unset fields keep defaults");
    }

    #[test]
    fn test_load_invalid_toml_falls_back() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "base_url = [not toml").expect("Failed to write config");

        let config = Config::load_or_default(Some(&path));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("theme"));
    }
}
