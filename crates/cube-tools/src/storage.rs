//! Directory management for table storage.

use std::fs;
use std::path::{Path, PathBuf};

use cube_core::errors::{CubeError, ErrorInfo};
use tracing::info;

use crate::config::StorageConfig;

/// Resolved two-level storage location for persisted tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    app_dir: PathBuf,
    table_dir: PathBuf,
}

impl StorageLocation {
    /// Resolves the location described by `config`. Nothing is created yet.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            app_dir: config.app_path(),
            table_dir: config.table_path(),
        }
    }

    /// Location under the platform's user-local data directory.
    pub fn platform_default() -> Result<Self, CubeError> {
        Ok(Self::new(&StorageConfig::platform_default()?))
    }

    /// Application directory.
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    /// Directory holding the table files.
    pub fn table_dir(&self) -> &Path {
        &self.table_dir
    }

    /// Creates the application directory and then the table directory when
    /// they are missing. Calling it again is a no-op.
    pub fn ensure_storage_location(&self) -> Result<(), CubeError> {
        ensure_dir(&self.app_dir)?;
        ensure_dir(&self.table_dir)
    }
}

fn ensure_dir(path: &Path) -> Result<(), CubeError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|err| {
        CubeError::Storage(
            ErrorInfo::new("storage-mkdir", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    info!(path = %path.display(), "created storage directory");
    Ok(())
}
