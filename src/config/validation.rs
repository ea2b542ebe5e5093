//! Configuration validation.
//!
//! # Responsibilities
//! - Check presence of the generic required keys (`host`, `port`, `scheme`)
//! - Check presence of `target_vm` as a separate, distinctly reported step
//! - Check value shapes and build the typed [`ProxyConfig`]
//!
//! # Design Decisions
//! - Checks run in that order and stop at the first failure, so a document
//!   missing both a generic key and `target_vm` reports the generic message
//! - Unknown keys are tolerated
//! - `dev` defaults to `false` and accepts the YAML 1.1 boolean spellings
//!   (`yes`/`no`, `on`/`off`, `y`/`n`)

use serde_yaml::Value;

use crate::config::error::ValidationError;
use crate::config::schema::{
    value_kind, ProxyConfig, RawConfig, DEV, HOST, KNOWN_KEYS, PORT, REQUIRED_KEYS, SCHEME, TARGET_VM,
};

const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// Validate a parsed document and build the typed configuration.
pub fn validate(raw: &RawConfig) -> Result<ProxyConfig, ValidationError> {
    let missing: Vec<&'static str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !raw.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequiredKeys(missing));
    }

    if !raw.contains_key(TARGET_VM) {
        return Err(ValidationError::MissingTargetVm);
    }

    for key in raw.keys() {
        match key.as_str() {
            Some(name) if KNOWN_KEYS.contains(&name) => {}
            _ => tracing::debug!(key = ?key, "Ignoring unknown configuration key"),
        }
    }

    let scheme = required_string(raw, SCHEME)?.to_ascii_lowercase();
    if !SUPPORTED_SCHEMES.contains(&scheme.as_str()) {
        return Err(ValidationError::invalid(
            SCHEME,
            format!("expected one of {}, found `{scheme}`", SUPPORTED_SCHEMES.join(", ")),
        ));
    }

    Ok(ProxyConfig {
        host: required_string(raw, HOST)?,
        port: port(raw)?,
        scheme,
        dev: dev(raw)?,
        target_vm: required_string(raw, TARGET_VM)?,
    })
}

fn required_string(raw: &RawConfig, key: &'static str) -> Result<String, ValidationError> {
    match raw.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_owned()),
        Some(Value::String(_)) => Err(ValidationError::invalid(key, "must not be empty")),
        Some(other) => Err(ValidationError::invalid(
            key,
            format!("expected a string, found {}", value_kind(other)),
        )),
        None => Err(ValidationError::invalid(key, "missing value")),
    }
}

fn port(raw: &RawConfig) -> Result<u16, ValidationError> {
    let value = raw.get(PORT);
    match value.and_then(Value::as_u64).map(u16::try_from) {
        Some(Ok(port)) if port != 0 => Ok(port),
        Some(_) => Err(ValidationError::invalid(
            PORT,
            "expected an integer between 1 and 65535",
        )),
        None => Err(ValidationError::invalid(
            PORT,
            format!(
                "expected an integer, found {}",
                value.map(value_kind).unwrap_or("nothing")
            ),
        )),
    }
}

fn dev(raw: &RawConfig) -> Result<bool, ValidationError> {
    match raw.get(DEV) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(dev)) => Ok(*dev),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "on" | "true" => Ok(true),
            "n" | "no" | "off" | "false" => Ok(false),
            _ => Err(ValidationError::invalid(
                DEV,
                format!("expected a boolean, found `{s}`"),
            )),
        },
        Some(other) => Err(ValidationError::invalid(
            DEV,
            format!("expected a boolean, found {}", value_kind(other)),
        )),
    }
}
