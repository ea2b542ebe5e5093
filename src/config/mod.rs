//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML)
//!     → loader.rs (read & parse into an untyped mapping)
//!     → validation.rs (required keys, `target_vm`, value shapes)
//!     → ProxyConfig (validated, immutable)
//!
//! On any failure:
//!     → ConfigError (error.rs)
//!     → Response (500, JSON) for the caller to report
//! ```
//!
//! # Design Decisions
//! - Runs once at startup, synchronously, before any forwarding
//! - The first failure stops the pipeline; no partial config escapes
//! - The untyped mapping never leaves this module's public entry points

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigErrorKind, ValidationError};
pub use loader::load_config;
pub use schema::ProxyConfig;
