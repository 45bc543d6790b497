use std::fs;
use std::path::{Path, PathBuf};

use page_logging::LogDestination;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "movie_server.ron";
/// Overrides `api_key` from the config file when set and non-empty.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Directory served for every path other than `/movie`.
    pub public_dir: PathBuf,
    pub upstream_base: String,
    pub api_key: String,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:35000".to_string(),
            public_dir: PathBuf::from("public"),
            upstream_base: "https://www.omdbapi.com/".to_string(),
            api_key: String::new(),
            log_destination: LogDestination::Terminal,
            log_file: PathBuf::from("./movie_server.log"),
        }
    }
}

/// Loads the config file and applies the `OMDB_API_KEY` override. Problems
/// are returned as warnings for the caller to log once logging is up.
pub fn load_config(path: &Path) -> (ServerConfig, Vec<String>) {
    load_config_with_key(path, std::env::var(API_KEY_ENV).ok())
}

/// [`load_config`] with the environment key passed in.
pub fn load_config_with_key(path: &Path, env_key: Option<String>) -> (ServerConfig, Vec<String>) {
    let mut warnings = Vec::new();
    let mut config = match read_file(path) {
        Ok(config) => config.unwrap_or_default(),
        Err(warning) => {
            warnings.push(format!("{warning}; using defaults"));
            ServerConfig::default()
        }
    };

    if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
        config.api_key = key.trim().to_string();
    }
    if config.api_key.is_empty() {
        warnings.push(
            "No upstream API key configured; lookups will fall back to the not-found card"
                .to_string(),
        );
    }
    (config, warnings)
}

fn read_file(path: &Path) -> Result<Option<ServerConfig>, String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(format!("Failed to read config from {:?}: {}", path, err)),
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| format!("Failed to parse config from {:?}: {}", path, err))
}
