//! Shared utilities for configuration integration tests.

use std::cell::RefCell;
use std::path::PathBuf;

use securedrop_proxy::Response;

/// Absolute path of a fixture under `tests/files`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("files")
        .join(name)
}

/// Records every response handed to a completion handler.
#[derive(Default)]
pub struct Recorder {
    responses: RefCell<Vec<Response>>,
}

impl Recorder {
    pub fn on_done(&self) -> impl FnOnce(Response) + '_ {
        move |res| self.responses.borrow_mut().push(res)
    }

    pub fn responses(&self) -> Vec<Response> {
        self.responses.borrow().clone()
    }

    /// The single response recorded, asserting the handler fired exactly once.
    pub fn only(&self) -> Response {
        let responses = self.responses();
        assert_eq!(responses.len(), 1, "handler should fire exactly once");
        responses.into_iter().next().unwrap()
    }
}

/// Assert the common 500 / JSON shape of every failure response.
pub fn assert_json_500(res: &Response) {
    assert_eq!(res.status, 500);
    assert_eq!(
        res.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    let body: serde_json::Value =
        serde_json::from_str(&res.body).expect("body should be JSON");
    assert!(body["error"].is_string(), "body should be a JSON error: {}", res.body);
}
