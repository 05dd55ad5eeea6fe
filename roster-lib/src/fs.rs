//! On-disk locations and configuration file helpers.
//!
//! Profiles are never written to disk. Only front-end preferences are.

use std::{
    fs::{self, create_dir_all},
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use xdg::BaseDirectories;

use crate::{Error, Result};

/// Returns the path to the roster configuration directory. If it doesn't exist when this
/// function is called, it will be created.
pub fn config_dir() -> Result<PathBuf> {
    let path = xdg_prefix()
        .get_config_home()
        .ok_or(Error::NoHomeDirectory)?;

    create_dir_all(&path)?;

    Ok(path)
}

/// Read a TOML file into `T`. A missing file is `Ok(None)`.
pub fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&contents)?))
}

/// Write `value` as pretty TOML, creating parent directories as needed.
pub fn write_toml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = toml::to_string_pretty(value)?;

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, contents)?;

    debug!("Wrote {}", path.display());
    Ok(())
}

fn xdg_prefix() -> BaseDirectories {
    BaseDirectories::with_prefix("roster")
}
