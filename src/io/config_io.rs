use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::Config;

/// Directory name used under the platform config and data directories
pub const APP_DIR: &str = "tally";
/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Error type for loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("cannot determine a data directory; pass --data-dir")]
    NoDataDir,
}

/// Default config file location: `<config dir>/tally/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

/// Read the config file. A missing file yields the default config; a
/// file that exists but does not parse is an error.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load config from an explicit path, or the default location if none given
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) => read_config(&path),
            None => Ok(Config::default()),
        },
    }
}

/// Resolve the data directory: CLI override, then `[storage] dir`, then
/// `<data dir>/tally`.
pub fn resolve_data_dir(override_dir: Option<&Path>, config: &Config) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.storage.dir {
        return Ok(expand_tilde(dir));
    }
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoDataDir)
}

fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
