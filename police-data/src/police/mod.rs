//! data.police.uk resources.
//!
//! [`PoliceDataService`] exposes one method per API resource. Each call
//! validates its input, issues a single GET through a
//! [`crate::transport::Transport`], and converts the JSON into domain
//! records. Responses are not cached between calls.

mod convert;
mod error;
mod service;
mod types;

pub use error::{Operation, ServiceError};
pub use service::PoliceDataService;
