//! In-memory transport for testing without network access.
//!
//! Serves canned JSON (or canned failures) keyed by request path and
//! records every request it receives.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use super::Transport;
use super::error::TransportError;

/// Canned outcome for one path.
#[derive(Debug, Clone)]
enum MockResponse {
    Json(Value),
    Status(u16),
    Unreachable,
    Body(String),
}

/// A request observed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
}

/// Transport double that never touches the network.
///
/// Paths without a canned response answer with a 404 status, matching
/// what the real service does for unknown resources.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a JSON document.
    pub fn with_json(mut self, path: impl Into<String>, json: Value) -> Self {
        self.responses.insert(path.into(), MockResponse::Json(json));
        self
    }

    /// Answer `path` with an error status.
    pub fn with_status(mut self, path: impl Into<String>, status: u16) -> Self {
        self.responses
            .insert(path.into(), MockResponse::Status(status));
        self
    }

    /// Fail requests for `path` as if the host could not be reached.
    pub fn with_connection_failure(mut self, path: impl Into<String>) -> Self {
        self.responses.insert(path.into(), MockResponse::Unreachable);
        self
    }

    /// Answer `path` with a raw 2xx body, decoded like a real response.
    pub fn with_body(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses
            .insert(path.into(), MockResponse::Body(body.into()));
        self
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.recorded().len()
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded().clone()
    }

    fn recorded(&self) -> std::sync::MutexGuard<'_, Vec<RecordedRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MockTransport {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, TransportError> {
        self.recorded().push(RecordedRequest {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        });

        match self.responses.get(path) {
            Some(MockResponse::Json(json)) => Ok(json.clone()),
            Some(MockResponse::Status(status)) => Err(TransportError::Status {
                status: *status,
                message: String::new(),
            }),
            Some(MockResponse::Unreachable) => Err(TransportError::Connection(format!(
                "could not connect to mock host for {path}"
            ))),
            Some(MockResponse::Body(body)) if body.trim().is_empty() => Ok(Value::Null),
            Some(MockResponse::Body(body)) => {
                serde_json::from_str(body).map_err(|e| TransportError::Json {
                    message: e.to_string(),
                    body: Some(body.clone()),
                })
            }
            None => Err(TransportError::Status {
                status: 404,
                message: format!("no mock response for {path}"),
            }),
        }
    }
}
