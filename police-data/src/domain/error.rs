//! Input validation errors.
//!
//! These errors describe caller-supplied input that failed local checks.
//! They are raised before any request is issued and are distinct from
//! transport failures.

use super::{InvalidCoordinate, InvalidForceId, InvalidMonth};

/// Caller-supplied input rejected before reaching the network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Coordinate(#[from] InvalidCoordinate),

    #[error(transparent)]
    Month(#[from] InvalidMonth),

    #[error(transparent)]
    ForceId(#[from] InvalidForceId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, ForceId, MonthPeriod};

    #[test]
    fn error_display() {
        let err: ValidationError = Coordinate::new(91.0, 0.0).unwrap_err().into();
        assert_eq!(err.to_string(), "latitude 91 is outside [-90, 90]");

        let err: ValidationError = MonthPeriod::parse("2024-1").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid month \"2024-1\": expected YYYY-MM");

        let err: ValidationError = ForceId::parse("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid force id: force id cannot be empty");
    }
}
