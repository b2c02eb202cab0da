//! Storage configuration for persisted tables.

use std::path::PathBuf;
use std::sync::OnceLock;

use cube_core::errors::{CubeError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Application directory created under the base data directory.
pub const DEFAULT_APP_DIR: &str = "CubeRobot";

/// Table directory created under the application directory.
pub const DEFAULT_TABLE_DIR: &str = "Tables";

/// Where tables live: `<base_dir>/<app_dir>/<table_dir>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base data directory.
    pub base_dir: PathBuf,
    /// Application directory name.
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
    /// Table directory name.
    #[serde(default = "default_table_dir")]
    pub table_dir: String,
}

fn default_app_dir() -> String {
    DEFAULT_APP_DIR.to_string()
}

fn default_table_dir() -> String {
    DEFAULT_TABLE_DIR.to_string()
}

impl StorageConfig {
    /// Default layout rooted at an explicit base directory.
    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            app_dir: default_app_dir(),
            table_dir: default_table_dir(),
        }
    }

    /// Default layout rooted at the platform's user-local data directory.
    ///
    /// The directory is looked up once per process.
    pub fn platform_default() -> Result<Self, CubeError> {
        static BASE_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
        let base_dir = BASE_DIR.get_or_init(dirs::data_local_dir).clone().ok_or_else(|| {
            CubeError::Config(
                ErrorInfo::new(
                    "config-data-dir",
                    "no user-local data directory on this platform",
                )
                .with_hint("build the configuration with StorageConfig::with_base"),
            )
        })?;
        Ok(Self::with_base(base_dir))
    }

    /// Parses a YAML configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CubeError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|err| {
            CubeError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects directory names that are empty or span several path components.
    pub fn validate(&self) -> Result<(), CubeError> {
        for (key, value) in [("app_dir", &self.app_dir), ("table_dir", &self.table_dir)] {
            if !is_single_component(value) {
                return Err(CubeError::Config(
                    ErrorInfo::new("config-dir-name", format!("invalid directory name {value:?}"))
                        .with_context("key", key),
                ));
            }
        }
        Ok(())
    }

    /// `<base_dir>/<app_dir>`.
    pub fn app_path(&self) -> PathBuf {
        self.base_dir.join(&self.app_dir)
    }

    /// `<base_dir>/<app_dir>/<table_dir>`.
    pub fn table_path(&self) -> PathBuf {
        self.app_path().join(&self.table_dir)
    }
}

pub(crate) fn is_single_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
