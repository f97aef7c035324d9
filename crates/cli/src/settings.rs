use std::{fs, io, path::Path};

use log::{LevelFilter, debug};
use serde::{Deserialize, Serialize};
use stride_domain::Locale;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "LocaleDef")]
    pub locale: Locale,
    pub log_level: LevelFilter,
}

impl Settings {
    /// Read the settings from a JSON file. Missing fields take their default value,
    /// a missing file results in the default settings.
    pub fn load(path: &Path) -> Result<Settings, SettingsError> {
        match fs::read_to_string(path) {
            Ok(content) => Settings::from_json(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no settings found at {}, using defaults", path.display());
                Ok(Settings::default())
            }
            Err(err) => Err(SettingsError::Io(err)),
        }
    }

    pub fn from_json(json: &str) -> Result<Settings, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Locale", rename_all = "lowercase")]
enum LocaleDef {
    English,
    Russian,
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}
