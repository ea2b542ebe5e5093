//! Configuration failure taxonomy.
//!
//! Every failure is terminal for startup and is reported as a 500 with a
//! JSON body. Kinds differ only in the diagnostic text, which carries a
//! stable substring per kind:
//!
//! | Kind                  | Body contains                          |
//! |-----------------------|----------------------------------------|
//! | `NotFound`            | `Configuration file does not exist`    |
//! | `SyntaxError`         | `YAML syntax error`                    |
//! | `IoError`             | (generic)                              |
//! | `MissingRequiredKeys` | `missing required keys`                |
//! | `MissingTargetVm`     | ``missing `target_vm` key``            |
//! | `InvalidValue`        | ``invalid value for `<key>` ``         |

use std::path::PathBuf;

use axum::http::StatusCode;
use thiserror::Error;

use crate::http::Response;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file does not exist at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("YAML syntax error in {}: {source}", .path.display())]
    Syntax {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Unable to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Schema violations found in a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Configuration file missing required keys: {}", .0.join(", "))]
    MissingRequiredKeys(Vec<&'static str>),

    #[error("Configuration file missing `target_vm` key")]
    MissingTargetVm,

    #[error("Configuration file has invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Tag identifying which failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    NotFound,
    SyntaxError,
    IoError,
    MissingRequiredKeys,
    MissingTargetVm,
    InvalidValue,
}

impl ConfigError {
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigError::NotFound { .. } => ConfigErrorKind::NotFound,
            ConfigError::Syntax { .. } => ConfigErrorKind::SyntaxError,
            ConfigError::Io { .. } => ConfigErrorKind::IoError,
            ConfigError::Validation(e) => e.kind(),
        }
    }

    /// Build the failure response reported to the caller.
    pub fn to_response(&self) -> Response {
        Response::error(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
    }
}

impl ValidationError {
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ValidationError::MissingRequiredKeys(_) => ConfigErrorKind::MissingRequiredKeys,
            ValidationError::MissingTargetVm => ConfigErrorKind::MissingTargetVm,
            ValidationError::InvalidValue { .. } => ConfigErrorKind::InvalidValue,
        }
    }

    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            key,
            reason: reason.into(),
        }
    }
}
