//! HTTP transport for the data.police.uk API.
//!
//! A transport issues a GET for a resource path relative to a configured
//! base URL and hands back the decoded JSON. It knows nothing about the
//! shape of police data; that lives in [`crate::police`].
//!
//! There is no retry or backoff. A failed request is reported once and
//! the caller decides what to do.

mod client;
mod error;
mod mock;

pub use client::{HttpTransport, TransportConfig};
pub use error::TransportError;
pub use mock::{MockTransport, RecordedRequest};

use serde_json::Value;

/// Issues GET requests and decodes the JSON response.
///
/// This abstraction lets the service be driven by [`MockTransport`] in tests.
/// The returned futures carry no `Send` bound; a transport is driven by one
/// caller at a time.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Fetch `path` (e.g. `/forces`) with the given query parameters.
    ///
    /// Non-2xx responses, network failures and bodies that are not JSON
    /// all surface as [`TransportError`]. An empty 2xx body decodes as
    /// [`Value::Null`].
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, TransportError>;
}
