//! User-tweakable settings, read from an optional JSON file.
//!
//! The settings file is looked up at [`config::settings_file_path`]. It is
//! perfectly fine for it not to exist: every field falls back to the
//! application default from the [`config`](crate::config) module.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::Error;

/// Settings of the application
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the task storage file lives. `None` means the configured default.
    #[serde(default)]
    pub storage_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default location. See [`Settings::from_file`]
    pub fn load() -> Result<Self, Error> {
        Self::from_file(&config::settings_file_path())
    }

    /// Initialize settings from the content of a valid settings file if it
    /// exists. A missing file yields the defaults; an unreadable or
    /// malformed one is an error.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let file = match std::fs::File::open(path) {
            Err(ref err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(Error::Persistence {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
            Ok(file) => file,
        };

        serde_json::from_reader(file).map_err(|err| Error::Persistence {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        })
    }

    /// The storage path to use: the override if one is set, the application
    /// default otherwise
    pub fn storage_path(&self) -> PathBuf {
        match &self.storage_file {
            Some(path) => path.clone(),
            None => config::default_storage_path(),
        }
    }
}
