//! Configuration schema definitions.
//!
//! The proxy reads a flat YAML document:
//!
//! ```yaml
//! host: jsonplaceholder.typicode.com
//! port: 443
//! scheme: https
//! dev: false        # optional
//! target_vm: compost
//! ```

use serde_yaml::Value;

/// Untyped document produced by the loader and consumed by the validator.
pub type RawConfig = serde_yaml::Mapping;

pub const HOST: &str = "host";
pub const PORT: &str = "port";
pub const SCHEME: &str = "scheme";
pub const DEV: &str = "dev";
pub const TARGET_VM: &str = "target_vm";

/// Keys checked together by the generic presence check, in reporting order.
///
/// `target_vm` is mandatory too but has its own check and message.
pub const REQUIRED_KEYS: [&str; 3] = [HOST, PORT, SCHEME];

/// Every key the proxy understands. Anything else is ignored.
pub const KNOWN_KEYS: [&str; 5] = [HOST, PORT, SCHEME, DEV, TARGET_VM];

/// Validated proxy configuration.
///
/// Produced by [`validate`](crate::config::validation::validate), which
/// guarantees a non-empty host, scheme and target VM and a non-zero port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Hostname requests are forwarded to.
    pub host: String,

    /// Port on `host`.
    pub port: u16,

    /// URI scheme, lowercased (`http` or `https`).
    pub scheme: String,

    /// Development mode. Defaults to `false` when absent.
    pub dev: bool,

    /// Execution environment requests are forwarded into.
    pub target_vm: String,
}

impl ProxyConfig {
    /// Base URL of the forwarding target, e.g. `https://example.org:443`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Short name of a YAML value's type, for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let config = ProxyConfig {
            host: "jsonplaceholder.typicode.com".into(),
            port: 443,
            scheme: "https".into(),
            dev: false,
            target_vm: "compost".into(),
        };
        assert_eq!(config.base_url(), "https://jsonplaceholder.typicode.com:443");
    }

    #[test]
    fn test_required_keys_exclude_target_vm() {
        assert!(!REQUIRED_KEYS.contains(&TARGET_VM));
        assert!(KNOWN_KEYS.contains(&TARGET_VM));
    }
}
