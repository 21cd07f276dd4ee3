//! Stop-and-search records.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A recorded police stop.
///
/// Demographic fields are often redacted upstream. Each display field falls
/// back to [`super::UNKNOWN`] on its own, so a record missing only `gender`
/// keeps everything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopSearchRecord {
    /// `Person search`, `Vehicle search` or `Person and Vehicle search`.
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub age_range: String,
    pub outcome: String,
    pub object_of_search: String,
    pub datetime: Option<DateTime<FixedOffset>>,
    pub legislation: Option<String>,
    pub officer_defined_ethnicity: Option<String>,
    pub self_defined_ethnicity: Option<String>,
}
