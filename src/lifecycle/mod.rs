//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → report failure or hand config to the proxy
//! ```

pub mod startup;

pub use startup::read_conf;
