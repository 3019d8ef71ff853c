//! Persisted selection: a small JSON file holding a [`ConfigRecord`].
//!
//! A missing file means "nothing saved yet" and loads as the default record.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConfigRecord;
use crate::error::ConfigStoreError;
use crate::path_de::from_str_with_path;

/// `~/.config/json-modelgen/config.json`.
pub fn default_config_path() -> Result<PathBuf, ConfigStoreError> {
    config_path_under(std::env::var_os("HOME"))
}

fn config_path_under(home: Option<OsString>) -> Result<PathBuf, ConfigStoreError> {
    match home.filter(|h| !h.is_empty()) {
        Some(home) => Ok(PathBuf::from(home).join(".config").join("json-modelgen").join("config.json")),
        None => Err(ConfigStoreError::NoHome),
    }
}

pub fn load(path: &Path) -> Result<ConfigRecord, ConfigStoreError> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved config; using defaults");
            return Ok(ConfigRecord::default());
        }
        Err(source) => return Err(ConfigStoreError::Io { path: path.to_path_buf(), source }),
    };
    from_str_with_path(&source).map_err(|err| ConfigStoreError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Write `record`, creating parent directories as needed.
pub fn save(path: &Path, record: &ConfigRecord) -> Result<(), ConfigStoreError> {
    let io_err = |source| ConfigStoreError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    fs::write(path, json).map_err(io_err)?;
    tracing::debug!(path = %path.display(), "saved config");
    Ok(())
}
