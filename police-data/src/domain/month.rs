//! Reporting month type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month {input:?}: {reason}")]
pub struct InvalidMonth {
    input: String,
    reason: &'static str,
}

/// A `YYYY-MM` reporting period used to filter crime and stop data.
///
/// The year is always four digits and the month is in `01..=12`.
///
/// # Examples
///
/// ```
/// use police_data::domain::MonthPeriod;
///
/// let m = MonthPeriod::parse("2024-03").unwrap();
/// assert_eq!(m.year(), 2024);
/// assert_eq!(m.month(), 3);
/// assert_eq!(m.to_string(), "2024-03");
///
/// assert!(MonthPeriod::parse("2024-13").is_err());
/// assert!(MonthPeriod::parse("24-03").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthPeriod {
    year: u16,
    month: u8,
}

impl MonthPeriod {
    /// Parse a month from `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self, InvalidMonth> {
        let invalid = |reason| InvalidMonth {
            input: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid("expected YYYY-MM"));
        }

        let (year, month) = (&bytes[..4], &bytes[5..]);
        if !year.iter().chain(month).all(u8::is_ascii_digit) {
            return Err(invalid("year and month must be digits"));
        }

        let year = digits(year) as u16;
        let month = digits(month) as u8;
        if !(1..=12).contains(&month) {
            return Err(invalid("month must be between 01 and 12"));
        }

        Ok(Self { year, month })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

/// Fold ASCII digits into a number. Callers have checked every byte is a digit.
fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl fmt::Debug for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthPeriod({self})")
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let m = MonthPeriod::parse("2023-01").unwrap();
        assert_eq!((m.year(), m.month()), (2023, 1));

        let m = MonthPeriod::parse("0999-12").unwrap();
        assert_eq!(m.to_string(), "0999-12");
    }

    #[test]
    fn reject_bad_month() {
        assert!(MonthPeriod::parse("2023-00").is_err());
        assert!(MonthPeriod::parse("2023-13").is_err());
        assert!(MonthPeriod::parse("2023-1").is_err());
    }

    #[test]
    fn reject_bad_shape() {
        assert!(MonthPeriod::parse("").is_err());
        assert!(MonthPeriod::parse("202301").is_err());
        assert!(MonthPeriod::parse("2023/01").is_err());
        assert!(MonthPeriod::parse("20a3-01").is_err());
        assert!(MonthPeriod::parse("2023-01-15").is_err());
        assert!(MonthPeriod::parse(" 2023-01").is_err());
    }

    #[test]
    fn error_display() {
        let err = MonthPeriod::parse("2023-13").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid month \"2023-13\": month must be between 01 and 12"
        );
    }

    #[test]
    fn ordering_follows_calendar() {
        let a = MonthPeriod::parse("2022-12").unwrap();
        let b = MonthPeriod::parse("2023-01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn serializes_as_string() {
        let m = MonthPeriod::parse("2024-07").unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"2024-07\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip(year in 0u16..=9999, month in 1u8..=12) {
            let s = format!("{year:04}-{month:02}");
            let m = MonthPeriod::parse(&s).unwrap();
            prop_assert_eq!(m.to_string(), s);
        }

        #[test]
        fn month_out_of_range_rejected(year in 0u16..=9999, month in 13u8..=99) {
            let s = format!("{year:04}-{month:02}");
            prop_assert!(MonthPeriod::parse(&s).is_err());
        }
    }
}
