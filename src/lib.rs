//! Startup configuration for the SecureDrop request-forwarding proxy.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{load_config, ConfigError, ConfigErrorKind, ProxyConfig};
pub use http::Response;
pub use lifecycle::read_conf;
