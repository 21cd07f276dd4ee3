//! Service error types.

use std::fmt;

use crate::domain::ValidationError;
use crate::transport::TransportError;

/// The logical request a [`ServiceError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListForces,
    ForceDetail,
    CrimesAtLocation,
    CrimeCategories,
    Neighbourhoods,
    StopSearches,
    CrimeStatistics,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Operation::ListForces => "load police forces",
            Operation::ForceDetail => "get force details",
            Operation::CrimesAtLocation => "search crimes",
            Operation::CrimeCategories => "get crime categories",
            Operation::Neighbourhoods => "get neighbourhoods",
            Operation::StopSearches => "get stop and searches",
            Operation::CrimeStatistics => "generate statistics",
        };
        f.write_str(action)
    }
}

/// Errors returned by [`super::PoliceDataService`].
///
/// Bad input, an unreachable or failing remote service, and a response
/// of the wrong shape each have their own variant. An empty result is not
/// an error.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Caller input failed local checks; no request was sent
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Remote service could not be reached or answered with an error
    #[error("failed to {operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },

    /// Response was JSON but not the expected shape
    #[error("failed to {operation}: unexpected response: {message}")]
    Decode {
        operation: Operation,
        message: String,
    },
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }

    /// The request that failed. `None` for validation errors.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ServiceError::Validation(_) => None,
            ServiceError::Transport { operation, .. } | ServiceError::Decode { operation, .. } => {
                Some(*operation)
            }
        }
    }

    /// HTTP status returned by the remote service, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Transport { source, .. } => source.status(),
            _ => None,
        }
    }
}
