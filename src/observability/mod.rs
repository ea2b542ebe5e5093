//! Observability subsystem.
//!
//! Structured log events from the config pipeline are emitted through
//! `tracing`; `logging.rs` installs the subscriber for the binary.

pub mod logging;
