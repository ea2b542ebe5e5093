//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration before anything else runs
//! - Hand a failure response to the caller's completion handler
//!
//! # Design Decisions
//! - Fail fast: any configuration error is fatal
//! - The handler is `FnOnce`, so it can fire at most once per call
//! - Halting after a failure is the caller's decision

use std::path::Path;

use crate::config::{load_config, ProxyConfig};
use crate::http::Response;

/// Load the configuration at `path`, reporting any failure through `on_done`.
///
/// Returns the validated configuration on success, in which case `on_done`
/// is not called. On failure `on_done` receives a 500 JSON response and
/// `None` is returned.
pub fn read_conf<F>(path: impl AsRef<Path>, on_done: F) -> Option<ProxyConfig>
where
    F: FnOnce(Response),
{
    match load_config(path.as_ref()) {
        Ok(config) => Some(config),
        Err(e) => {
            on_done(e.to_response());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_handler_called_once_on_failure() {
        let calls = RefCell::new(Vec::new());
        let config = read_conf("not/a/real/path", |res| calls.borrow_mut().push(res));

        assert!(config.is_none());
        let calls = calls.into_inner();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].status, 500);
        assert!(calls[0].body.contains("Configuration file does not exist"));
    }
}
