//! JSON settings file for Windows.
//!
//! Stores settings in %APPDATA%\Tabstash\config.json. Only configuration
//! lives here; the hidden-window list is never persisted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Settings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Config file path: %APPDATA%\Tabstash\config.json
pub fn config_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join("Tabstash").join("config.json")
}

/// Parse and validate settings JSON.
pub fn parse_settings(contents: &str) -> Result<Settings, serde_json::Error> {
    let mut settings: Settings = serde_json::from_str(contents)?;
    settings.validate();
    Ok(settings)
}

/// Load settings from `path`, writing the defaults there if it does not exist.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_settings(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let settings = Settings::default();
            save_settings_to(path, &settings)?;
            Ok(settings)
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(write_err)
}

/// Load settings from the default location.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(&config_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validates_values() {
        let settings = parse_settings(r#"{"window_width": 5, "hotkey_vk": 0}"#).unwrap();
        assert_eq!(
            settings.window_width,
            crate::model::constants::MIN_WINDOW_DIMENSION
        );
        assert_eq!(
            settings.hotkey_vk,
            crate::model::constants::DEFAULT_HOTKEY_VK
        );
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse_settings("{ not json").is_err());
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = std::env::temp_dir().join(format!("tabstash-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let _ = fs::remove_file(&path);

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());

        let reloaded = load_settings_from(&path).unwrap();
        assert_eq!(reloaded, settings);

        let _ = fs::remove_dir_all(&dir);
    }
}
