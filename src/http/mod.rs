//! Outward-facing response types.
//!
//! # Data Flow
//! ```text
//! ConfigError
//!     → response.rs (500, JSON body, Content-Type header)
//!     → caller's completion handler / stdout / Axum handler
//! ```

pub mod response;

pub use response::Response;
