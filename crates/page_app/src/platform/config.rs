use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use page_engine::RequestSettings;
use page_logging::LogDestination;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "page_app.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin the page was "served" from; lookup paths resolve against it.
    pub origin: String,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    /// Optional whole-request deadline in milliseconds. Unset means none.
    pub request_timeout_ms: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: RequestSettings::default().origin,
            log_destination: LogDestination::File,
            log_file: PathBuf::from("./page.log"),
            request_timeout_ms: None,
        }
    }
}

impl AppConfig {
    pub fn request_settings(&self) -> RequestSettings {
        RequestSettings {
            origin: self.origin.clone(),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            ..RequestSettings::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Reads the config file; `Ok(None)` when it does not exist.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Like [`read_config`], but falls back to defaults. The error, if any, is
/// handed back so it can be reported once logging is up.
pub fn load_config(path: &Path) -> (AppConfig, Option<ConfigError>) {
    match read_config(path) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    }
}
