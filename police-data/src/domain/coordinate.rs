//! Geographic coordinate type.

use std::fmt;

use serde::Serialize;

/// Error returned when a latitude/longitude pair is not a valid position.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    #[error("latitude must be a finite number")]
    NonFiniteLatitude,

    #[error("longitude must be a finite number")]
    NonFiniteLongitude,

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A WGS84 position on the earth's surface.
///
/// Both components are finite, latitude lies in `[-90, 90]` and longitude
/// in `[-180, 180]`. Any `Coordinate` value is valid by construction, so
/// code holding one never needs to re-check it before building a request.
///
/// # Examples
///
/// ```
/// use police_data::domain::Coordinate;
///
/// let london = Coordinate::new(51.5074, -0.1278).unwrap();
/// assert_eq!(london.lat(), 51.5074);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Validate and construct a coordinate.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() {
            return Err(InvalidCoordinate::NonFiniteLatitude);
        }
        if !lng.is_finite() {
            return Err(InvalidCoordinate::NonFiniteLongitude);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every in-range pair is accepted and round-trips unchanged
        #[test]
        fn valid_always_accepted(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let c = Coordinate::new(lat, lng).unwrap();
            prop_assert_eq!(c.lat(), lat);
            prop_assert_eq!(c.lng(), lng);
        }

        #[test]
        fn latitude_beyond_pole_rejected(lat in 90.000_001f64..1.0e6, lng in -180.0f64..=180.0) {
            prop_assert!(Coordinate::new(lat, lng).is_err());
            prop_assert!(Coordinate::new(-lat, lng).is_err());
        }

        #[test]
        fn longitude_beyond_antimeridian_rejected(lat in -90.0f64..=90.0, lng in 180.000_001f64..1.0e6) {
            prop_assert!(Coordinate::new(lat, lng).is_err());
            prop_assert!(Coordinate::new(lat, -lng).is_err());
        }
    }
}
