//! Conversion from API DTOs to domain records.
//!
//! This is the single place where missing upstream fields receive their
//! defaults: display strings become [`UNKNOWN`], structured fields stay
//! `None`. Defaults apply per field, never per record.

use chrono::DateTime;
use tracing::warn;

use crate::domain::{
    CrimeCategory, CrimeLocation, CrimeRecord, EngagementMethod, Force, MonthPeriod,
    Neighbourhood, OutcomeStatus, StopSearchRecord, UNKNOWN,
};

use super::types::{
    RawCrime, RawCrimeCategory, RawCrimeLocation, RawEngagementMethod, RawForce,
    RawNeighbourhood, RawOutcomeStatus, RawStopSearch,
};

/// Convert a force list entry or force detail body.
pub fn convert_force(raw: RawForce) -> Force {
    Force {
        id: or_unknown(raw.id),
        name: or_unknown(raw.name),
        description: non_empty(raw.description),
        url: non_empty(raw.url),
        telephone: non_empty(raw.telephone),
        engagement_methods: raw
            .engagement_methods
            .unwrap_or_default()
            .into_iter()
            .map(convert_engagement_method)
            .collect(),
    }
}

fn convert_engagement_method(raw: RawEngagementMethod) -> EngagementMethod {
    EngagementMethod {
        title: or_unknown(raw.title),
        url: non_empty(raw.url),
        description: non_empty(raw.description),
    }
}

/// Convert a street-level crime.
pub fn convert_crime(raw: RawCrime) -> CrimeRecord {
    CrimeRecord {
        id: raw.id,
        persistent_id: non_empty(raw.persistent_id),
        category: or_unknown(raw.category),
        month: parse_month(raw.month, "month"),
        location: convert_location(raw.location),
        location_type: non_empty(raw.location_type),
        context: non_empty(raw.context),
        outcome_status: raw.outcome_status.map(convert_outcome),
    }
}

/// A crime with no `location`, or a location with no `street`, still gets
/// a street name.
fn convert_location(raw: Option<RawCrimeLocation>) -> CrimeLocation {
    let raw = raw.unwrap_or_default();
    let street = raw.street.unwrap_or_default();

    CrimeLocation {
        street_id: street.id,
        street_name: or_unknown(street.name),
        latitude: non_empty(raw.latitude),
        longitude: non_empty(raw.longitude),
    }
}

fn convert_outcome(raw: RawOutcomeStatus) -> OutcomeStatus {
    OutcomeStatus {
        category: or_unknown(raw.category),
        date: parse_month(raw.date, "outcome_status.date"),
    }
}

pub fn convert_category(raw: RawCrimeCategory) -> CrimeCategory {
    CrimeCategory {
        id: or_unknown(raw.url),
        name: or_unknown(raw.name),
    }
}

pub fn convert_neighbourhood(raw: RawNeighbourhood) -> Neighbourhood {
    Neighbourhood {
        id: or_unknown(raw.id),
        name: or_unknown(raw.name),
    }
}

/// Convert a stop-and-search record.
pub fn convert_stop_search(raw: RawStopSearch) -> StopSearchRecord {
    let datetime = non_empty(raw.datetime).and_then(|s| match DateTime::parse_from_rfc3339(&s) {
        Ok(dt) => Some(dt),
        Err(e) => {
            warn!(value = %s, error = %e, "ignoring unparseable stop datetime");
            None
        }
    });

    StopSearchRecord {
        kind: or_unknown(raw.kind),
        gender: or_unknown(raw.gender),
        age_range: or_unknown(raw.age_range),
        outcome: or_unknown(raw.outcome),
        object_of_search: or_unknown(raw.object_of_search),
        datetime,
        legislation: non_empty(raw.legislation),
        officer_defined_ethnicity: non_empty(raw.officer_defined_ethnicity),
        self_defined_ethnicity: non_empty(raw.self_defined_ethnicity),
    }
}

/// The API sends `""` for some absent values; treat it like a missing field.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn or_unknown(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| UNKNOWN.to_string())
}

fn parse_month(value: Option<String>, field: &'static str) -> Option<MonthPeriod> {
    let value = non_empty(value)?;
    match MonthPeriod::parse(&value) {
        Ok(month) => Some(month),
        Err(e) => {
            warn!(field, error = %e, "ignoring unparseable month");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn raw<T: serde::de::DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn crime_without_location_gets_placeholder_street() {
        let crime = convert_crime(raw(json!({"category": "burglary"})));

        assert_eq!(crime.category, "burglary");
        assert_eq!(crime.location.street_name, UNKNOWN);
        assert!(crime.location.latitude.is_none());
        assert!(crime.month.is_none());
    }

    #[test]
    fn crime_without_street_keeps_coordinates() {
        let crime = convert_crime(raw(json!({
            "category": "drugs",
            "location": {"latitude": "52.634", "longitude": "-1.129"},
        })));

        assert_eq!(crime.location.street_name, UNKNOWN);
        assert_eq!(crime.location.latitude.as_deref(), Some("52.634"));
        assert_eq!(crime.location.longitude.as_deref(), Some("-1.129"));
    }

    #[test]
    fn full_crime() {
        let crime = convert_crime(raw(json!({
            "category": "anti-social-behaviour",
            "location_type": "Force",
            "location": {
                "latitude": "52.640961",
                "street": {"id": 884343, "name": "On or near Wharf Street North"},
                "longitude": "-1.126371"
            },
            "context": "",
            "outcome_status": {"category": "Under investigation", "date": "2024-01"},
            "persistent_id": "",
            "id": 116208998,
            "location_subtype": "",
            "month": "2024-01"
        })));

        assert_eq!(crime.id, Some(116_208_998));
        assert_eq!(crime.month, Some(MonthPeriod::parse("2024-01").unwrap()));
        assert_eq!(crime.location.street_id, Some(884_343));
        assert_eq!(crime.location.street_name, "On or near Wharf Street North");
        assert_eq!(crime.location_type.as_deref(), Some("Force"));
        assert!(crime.persistent_id.is_none());
        assert!(crime.context.is_none());
        let outcome = crime.outcome_status.unwrap();
        assert_eq!(outcome.category, "Under investigation");
        assert_eq!(outcome.date.map(|m| m.to_string()).as_deref(), Some("2024-01"));
    }

    #[test]
    fn malformed_month_is_dropped() {
        let crime = convert_crime(raw(json!({"category": "drugs", "month": "January"})));
        assert!(crime.month.is_none());
        assert_eq!(crime.category, "drugs");
    }

    #[test]
    fn missing_category_is_unknown() {
        let crime = convert_crime(raw(json!({"month": "2024-02"})));
        assert_eq!(crime.category, UNKNOWN);
    }

    #[test]
    fn stop_search_defaults_each_field() {
        let stop = convert_stop_search(raw(json!({
            "type": "Person search",
            "age_range": "25-34",
            "outcome": "A no further action disposal",
        })));

        assert_eq!(stop.kind, "Person search");
        assert_eq!(stop.gender, UNKNOWN);
        assert_eq!(stop.age_range, "25-34");
        assert_eq!(stop.outcome, "A no further action disposal");
        assert_eq!(stop.object_of_search, UNKNOWN);
        assert!(stop.datetime.is_none());
    }

    #[test]
    fn stop_search_datetime() {
        let stop = convert_stop_search(raw(json!({"datetime": "2024-01-05T14:30:00+00:00"})));
        let dt = stop.datetime.unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-05T14:30:00+00:00");

        let stop = convert_stop_search(raw(json!({"datetime": "yesterday"})));
        assert!(stop.datetime.is_none());
    }

    #[test]
    fn force_detail() {
        let force = convert_force(raw(json!({
            "id": "leicestershire",
            "name": "Leicestershire Police",
            "description": null,
            "url": "http://www.leics.police.uk/",
            "telephone": "101",
            "engagement_methods": [
                {"title": "facebook", "url": "http://www.facebook.com/leicspolice", "description": null},
                {"url": "http://www.twitter.com/leicspolice"}
            ]
        })));

        assert_eq!(force.id, "leicestershire");
        assert!(force.description.is_none());
        assert_eq!(force.telephone.as_deref(), Some("101"));
        assert_eq!(force.engagement_methods.len(), 2);
        assert_eq!(force.engagement_methods[0].title, "facebook");
        assert_eq!(force.engagement_methods[1].title, UNKNOWN);
    }

    #[test]
    fn force_list_entry_has_no_detail() {
        let force = convert_force(raw(json!({"id": "kent", "name": "Kent Police"})));
        assert_eq!(force.name, "Kent Police");
        assert!(force.url.is_none());
        assert!(force.engagement_methods.is_empty());
    }

    #[test]
    fn category_and_neighbourhood() {
        let cat = convert_category(raw(json!({"url": "all-crime", "name": "All crime"})));
        assert_eq!(cat.id, "all-crime");
        assert_eq!(cat.name, "All crime");

        let hood = convert_neighbourhood(raw(json!({"id": "NC04"})));
        assert_eq!(hood.id, "NC04");
        assert_eq!(hood.name, UNKNOWN);
    }
}
