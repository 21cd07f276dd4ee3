//! Domain types for UK police open data.
//!
//! Caller inputs (`Coordinate`, `MonthPeriod`, `ForceId`) enforce their
//! invariants at construction time. Records are plain value objects built
//! from upstream JSON with missing fields already defaulted.

mod coordinate;
mod crime;
mod error;
mod force;
mod month;
mod neighbourhood;
mod stop_search;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use crime::{CrimeCategory, CrimeLocation, CrimeRecord, OutcomeStatus};
pub use error::ValidationError;
pub use force::{EngagementMethod, Force, ForceId, InvalidForceId};
pub use month::{InvalidMonth, MonthPeriod};
pub use neighbourhood::Neighbourhood;
pub use stop_search::StopSearchRecord;

/// Placeholder for display fields the upstream record omitted.
pub const UNKNOWN: &str = "Unknown";
