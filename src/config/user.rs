use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{QuineError, Result};

/// User-level defaults loaded from `~/.config/quine/config.toml`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Copyright owner used when `--owner` is not given.
    #[serde(default)]
    pub owner: Option<String>,

    /// License used when `--license` is not given.
    #[serde(default)]
    pub license: Option<String>,

    /// Directory of license templates used when `--license-dir` is not given.
    #[serde(default)]
    pub license_dir: Option<PathBuf>,
}

/// Get the path to the user config file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("quine").join("config.toml"))
}

/// Load user configuration from the XDG config directory.
///
/// Returns `Ok(None)` if the config file does not exist.
/// Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    let path = match config_path() {
        Some(p) => p,
        None => return Ok(None),
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| QuineError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    let config: UserConfig =
        toml::from_str(&content).map_err(|e| QuineError::ConfigParse { path, source: e })?;

    Ok(Some(config))
}
