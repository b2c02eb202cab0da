//! Structured error types shared across the cube toolkit crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CubeError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, positions, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the cube toolkit.
///
/// Validation outcomes are not errors; see `cube_cubie::Verdict`. Everything
/// in here aborts the operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CubeError {
    /// Malformed surface encoding (length or symbol).
    #[error("facelet error: {0}")]
    Facelet(ErrorInfo),
    /// Coordinate outside of its valid range.
    #[error("coordinate error: {0}")]
    Coordinate(ErrorInfo),
    /// Filesystem faults while preparing or accessing table storage.
    #[error("storage error: {0}")]
    Storage(ErrorInfo),
    /// Structurally invalid table files or shapes.
    #[error("table error: {0}")]
    Table(ErrorInfo),
    /// Storage configuration that cannot be resolved or parsed.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CubeError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CubeError::Facelet(info)
            | CubeError::Coordinate(info)
            | CubeError::Storage(info)
            | CubeError::Table(info)
            | CubeError::Config(info) => info,
        }
    }

    /// Adds a context entry to the payload, whatever the family.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            CubeError::Facelet(info) => CubeError::Facelet(info.with_context(key, value)),
            CubeError::Coordinate(info) => CubeError::Coordinate(info.with_context(key, value)),
            CubeError::Storage(info) => CubeError::Storage(info.with_context(key, value)),
            CubeError::Table(info) => CubeError::Table(info.with_context(key, value)),
            CubeError::Config(info) => CubeError::Config(info.with_context(key, value)),
        }
    }

    /// Returns true for filesystem faults and unreadable table files.
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, CubeError::Storage(_) | CubeError::Table(_))
    }
}
