//! Street-level crime records.

use serde::Serialize;

use super::MonthPeriod;

/// A single street-level crime incident.
///
/// Display strings that were missing upstream hold [`super::UNKNOWN`];
/// structured fields that were missing are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrimeRecord {
    /// Upstream numeric id.
    pub id: Option<u64>,

    /// 64-character id that follows the crime across monthly releases.
    pub persistent_id: Option<String>,

    /// Category slug, e.g. `anti-social-behaviour`. Kept exactly as sent.
    pub category: String,

    /// Month the crime was reported in.
    pub month: Option<MonthPeriod>,

    pub location: CrimeLocation,

    /// `Force` or `BTP` (British Transport Police).
    pub location_type: Option<String>,

    /// Extra free-text context, if the force supplied any.
    pub context: Option<String>,

    /// Latest recorded outcome.
    pub outcome_status: Option<OutcomeStatus>,
}

/// Approximate location of a crime.
///
/// Positions are anonymised to a nearby map point, so latitude and longitude
/// are kept as the strings the service sent rather than re-parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrimeLocation {
    pub street_id: Option<u64>,
    pub street_name: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// The most recent outcome recorded against a crime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeStatus {
    pub category: String,
    pub date: Option<MonthPeriod>,
}

/// A crime category as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrimeCategory {
    /// Slug used in crime records, e.g. `burglary`.
    pub id: String,
    /// Human readable name, e.g. `Burglary`.
    pub name: String,
}
