//! Configuration loading from disk.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde_yaml::Value;

use crate::config::error::ConfigError;
use crate::config::schema::{value_kind, ProxyConfig, RawConfig};
use crate::config::validation::validate;

/// Read and parse a YAML configuration file into an untyped mapping.
///
/// The file is opened once and the failure is classified afterwards, with no
/// separate existence check. Anything that is not a regular file counts as
/// missing. A document that is empty or whose top level is
/// not a mapping yields an empty mapping, which the validator then rejects.
pub fn load_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "Reading configuration file");

    let bytes = read_file(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::IsADirectory => {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        }
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let document: Value = serde_yaml::from_slice(&bytes).map_err(|e| ConfigError::Syntax {
        path: path.to_path_buf(),
        source: e,
    })?;

    match document {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(RawConfig::new()),
        other => {
            tracing::warn!(
                path = %path.display(),
                found = value_kind(&other),
                "Configuration document is not a mapping"
            );
            Ok(RawConfig::new())
        }
    }
}

/// Load and validate configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let result = load_raw(path).and_then(|raw| validate(&raw).map_err(ConfigError::from));

    match &result {
        Ok(config) => tracing::info!(
            host = %config.host,
            port = config.port,
            scheme = %config.scheme,
            target_vm = %config.target_vm,
            dev = config.dev,
            "Configuration loaded"
        ),
        Err(e) => tracing::error!(
            path = %path.display(),
            kind = ?e.kind(),
            error = %e,
            "Failed to load configuration"
        ),
    }

    result
}

fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    if !file.metadata()?.is_file() {
        return Err(io::Error::new(io::ErrorKind::NotFound, "not a regular file"));
    }
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
