//! Configuration for StudentDB
//!
//! Centralized configuration with sensible defaults.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, StudentDbError};

/// Default name of the data file
pub const DEFAULT_DATA_FILE: &str = "students.dat";

/// Default name of the scratch file used by delete
pub const DEFAULT_TEMP_FILE: &str = "temp.dat";

/// Main configuration for a StudentDB instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Flat file holding every record, back to back
    pub data_file: PathBuf,

    /// Scratch file a delete rewrites into before swapping it over `data_file`.
    /// Must live on the same filesystem as `data_file` for the rename to work.
    pub temp_file: PathBuf,

    /// How hard writes try to reach the disk
    pub sync_mode: SyncMode,
}

/// Sync strategy for writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Leave flushing to the OS once the file is closed
    OnClose,

    /// fsync after every append and before every delete swap
    EveryWrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            temp_file: PathBuf::from(DEFAULT_TEMP_FILE),
            sync_mode: SyncMode::OnClose,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the paths can be used together
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(StudentDbError::Config("data file path is empty".to_string()));
        }
        if self.temp_file.as_os_str().is_empty() {
            return Err(StudentDbError::Config("temp file path is empty".to_string()));
        }
        if normalize(&self.data_file)? == normalize(&self.temp_file)? {
            return Err(StudentDbError::Config(format!(
                "temp file {} names the data file {}",
                self.temp_file.display(),
                self.data_file.display()
            )));
        }
        Ok(())
    }
}

/// Absolute form of `path` with `.` and `..` folded away lexically
///
/// Symlinks are not resolved here; `RecordStore::delete_by_id` checks the
/// real files before it creates the temp file.
fn normalize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Place both the data file and the temp file (default names) in `dir`
    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.config.data_file = dir.join(DEFAULT_DATA_FILE);
        self.config.temp_file = dir.join(DEFAULT_TEMP_FILE);
        self
    }

    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the temp file path
    pub fn temp_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.temp_file = path.into();
        self
    }

    /// Set the sync mode
    pub fn sync_mode(mut self, mode: SyncMode) -> Self {
        self.config.sync_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
