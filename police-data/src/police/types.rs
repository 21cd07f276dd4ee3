//! data.police.uk response DTOs.
//!
//! These types map directly to the API's JSON. Every field is optional
//! because the service omits fields, sends `null`, or (for some older
//! stop-and-search releases) sends `false` in place of a string. Scalar
//! and nested fields are read leniently: a value of an unexpected type is
//! treated as missing rather than failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Entry from `/forces` or the body of `/forces/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawForce {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// HTML fragment.
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub telephone: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub engagement_methods: Option<Vec<RawEngagementMethod>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEngagementMethod {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

/// Entry from `/crimes-at-location`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCrime {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient_string")]
    pub persistent_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    /// `YYYY-MM`.
    #[serde(deserialize_with = "lenient_string")]
    pub month: Option<String>,
    #[serde(deserialize_with = "lenient_struct")]
    pub location: Option<RawCrimeLocation>,
    #[serde(deserialize_with = "lenient_string")]
    pub location_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub context: Option<String>,
    #[serde(deserialize_with = "lenient_struct")]
    pub outcome_status: Option<RawOutcomeStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCrimeLocation {
    #[serde(deserialize_with = "lenient_string")]
    pub latitude: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub longitude: Option<String>,
    #[serde(deserialize_with = "lenient_struct")]
    pub street: Option<RawStreet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStreet {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutcomeStatus {
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    /// `YYYY-MM`.
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

/// Entry from `/crime-categories`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCrimeCategory {
    /// Category slug, despite the field name.
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Entry from `/{force}/neighbourhoods`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawNeighbourhood {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Entry from `/stops-street`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStopSearch {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub age_range: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub outcome: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub object_of_search: Option<String>,
    /// ISO 8601 with offset.
    #[serde(deserialize_with = "lenient_string")]
    pub datetime: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub legislation: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub officer_defined_ethnicity: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub self_defined_ethnicity: Option<String>,
}

/// Read a string field, treating null, booleans, arrays and objects as
/// missing. Numbers are kept in their textual form.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Read an unsigned id that may arrive as a number or a numeric string.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Read a nested object, treating anything that does not decode as one
/// as missing.
fn lenient_struct<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Read a list of nested objects, dropping elements that are not objects.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}
