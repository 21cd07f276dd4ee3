//! Police data service.
//!
//! Maps each logical resource to a transport call, validates caller input
//! before any I/O, and normalizes the JSON that comes back.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    Coordinate, CrimeCategory, CrimeRecord, Force, ForceId, MonthPeriod, Neighbourhood,
    StopSearchRecord, ValidationError,
};
use crate::stats::{CategoryStat, category_stats};
use crate::transport::Transport;

use super::convert::{
    convert_category, convert_crime, convert_force, convert_neighbourhood, convert_stop_search,
};
use super::error::{Operation, ServiceError};
use super::types::{RawCrime, RawCrimeCategory, RawForce, RawNeighbourhood, RawStopSearch};

/// Client for the data.police.uk resources.
///
/// Owns its transport; construct it once and reuse it so the transport's
/// connection pool is shared across calls. The service is intended for
/// one caller at a time.
pub struct PoliceDataService<T> {
    transport: T,
}

impl<T: Transport> PoliceDataService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List all forces. Entries carry only `id` and `name`.
    pub async fn list_forces(&self) -> Result<Vec<Force>, ServiceError> {
        let raw: Vec<RawForce> = self
            .fetch_list(Operation::ListForces, "/forces", &[])
            .await?;
        Ok(raw.into_iter().map(convert_force).collect())
    }

    /// Full details for one force.
    ///
    /// The id is checked for shape only. An id the service does not know
    /// comes back as a transport error (usually a 404), never as an empty
    /// force.
    pub async fn force_detail(&self, force_id: &str) -> Result<Force, ServiceError> {
        let force_id = ForceId::parse(force_id).map_err(ValidationError::from)?;
        let op = Operation::ForceDetail;

        let path = format!("/forces/{}", force_id.as_str());
        let value = self.fetch(op, &path, &[]).await?;

        if !value.is_object() {
            return Err(ServiceError::Decode {
                operation: op,
                message: format!("expected a force object for {force_id}, got {}", kind(&value)),
            });
        }

        let raw: RawForce = decode(op, value)?;
        Ok(convert_force(raw))
    }

    /// Street-level crimes at or near a position.
    ///
    /// `month` is `YYYY-MM`; `None` or a blank string asks for the latest
    /// month the service has published. Invalid input is rejected before
    /// any request is sent.
    pub async fn crimes_at_location(
        &self,
        lat: f64,
        lng: f64,
        month: Option<&str>,
    ) -> Result<Vec<CrimeRecord>, ServiceError> {
        let (coord, month) = validate_location(lat, lng, month)?;
        self.crimes_at(&coord, month.as_ref()).await
    }

    /// Like [`Self::crimes_at_location`] for already-validated input.
    pub async fn crimes_at(
        &self,
        coord: &Coordinate,
        month: Option<&MonthPeriod>,
    ) -> Result<Vec<CrimeRecord>, ServiceError> {
        self.fetch_crimes(Operation::CrimesAtLocation, coord, month)
            .await
    }

    /// Crime categories valid for `month` (latest month when `None`).
    pub async fn crime_categories(
        &self,
        month: Option<&str>,
    ) -> Result<Vec<CrimeCategory>, ServiceError> {
        let month = parse_optional_month(month)?;
        let params: Vec<(&str, String)> = month
            .map(|m| ("date", m.to_string()))
            .into_iter()
            .collect();

        let raw: Vec<RawCrimeCategory> = self
            .fetch_list(Operation::CrimeCategories, "/crime-categories", &params)
            .await?;
        Ok(raw.into_iter().map(convert_category).collect())
    }

    /// Neighbourhood teams of a force.
    pub async fn neighbourhoods(&self, force_id: &str) -> Result<Vec<Neighbourhood>, ServiceError> {
        let force_id = ForceId::parse(force_id).map_err(ValidationError::from)?;
        let path = format!("/{}/neighbourhoods", force_id.as_str());

        let raw: Vec<RawNeighbourhood> = self
            .fetch_list(Operation::Neighbourhoods, &path, &[])
            .await?;
        Ok(raw.into_iter().map(convert_neighbourhood).collect())
    }

    /// Stop-and-searches at street level near a position.
    ///
    /// Input rules are the same as [`Self::crimes_at_location`].
    pub async fn stop_searches(
        &self,
        lat: f64,
        lng: f64,
        month: Option<&str>,
    ) -> Result<Vec<StopSearchRecord>, ServiceError> {
        let (coord, month) = validate_location(lat, lng, month)?;
        self.stop_searches_at(&coord, month.as_ref()).await
    }

    /// Like [`Self::stop_searches`] for already-validated input.
    pub async fn stop_searches_at(
        &self,
        coord: &Coordinate,
        month: Option<&MonthPeriod>,
    ) -> Result<Vec<StopSearchRecord>, ServiceError> {
        let params = location_params(coord, month);
        let raw: Vec<RawStopSearch> = self
            .fetch_list(Operation::StopSearches, "/stops-street", &params)
            .await?;
        Ok(raw.into_iter().map(convert_stop_search).collect())
    }

    /// Fetch crimes near a position and break them down by category.
    ///
    /// No crimes gives an empty breakdown.
    pub async fn crime_statistics(
        &self,
        lat: f64,
        lng: f64,
        month: Option<&str>,
    ) -> Result<Vec<CategoryStat>, ServiceError> {
        let (coord, month) = validate_location(lat, lng, month)?;
        self.crime_statistics_at(&coord, month.as_ref()).await
    }

    /// Like [`Self::crime_statistics`] for already-validated input.
    pub async fn crime_statistics_at(
        &self,
        coord: &Coordinate,
        month: Option<&MonthPeriod>,
    ) -> Result<Vec<CategoryStat>, ServiceError> {
        let crimes = self
            .fetch_crimes(Operation::CrimeStatistics, coord, month)
            .await?;
        Ok(category_stats(&crimes))
    }

    async fn fetch_crimes(
        &self,
        operation: Operation,
        coord: &Coordinate,
        month: Option<&MonthPeriod>,
    ) -> Result<Vec<CrimeRecord>, ServiceError> {
        let params = location_params(coord, month);
        let raw: Vec<RawCrime> = self
            .fetch_list(operation, "/crimes-at-location", &params)
            .await?;
        Ok(raw.into_iter().map(convert_crime).collect())
    }

    async fn fetch(
        &self,
        operation: Operation,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ServiceError> {
        self.transport
            .get(path, params)
            .await
            .map_err(|source| ServiceError::Transport { operation, source })
    }

    /// Fetch a JSON array. `null` counts as an empty list.
    ///
    /// Elements are decoded one at a time; an element that is not an object
    /// is logged and skipped so the rest of the list survives.
    async fn fetch_list<R: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<R>, ServiceError> {
        let value = self.fetch(operation, path, params).await?;

        let items = match value {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            other => {
                return Err(ServiceError::Decode {
                    operation,
                    message: format!("expected a list, got {}", kind(&other)),
                });
            }
        };

        debug!(%operation, count = items.len(), "fetched records");

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if !item.is_object() {
                warn!(%operation, index, got = kind(&item), "skipping non-object record");
                continue;
            }
            match serde_json::from_value(item) {
                Ok(record) => records.push(record),
                Err(e) => warn!(%operation, index, error = %e, "skipping undecodable record"),
            }
        }
        Ok(records)
    }
}

fn decode<R: DeserializeOwned>(operation: Operation, value: Value) -> Result<R, ServiceError> {
    serde_json::from_value(value).map_err(|e| ServiceError::Decode {
        operation,
        message: e.to_string(),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn validate_location(
    lat: f64,
    lng: f64,
    month: Option<&str>,
) -> Result<(Coordinate, Option<MonthPeriod>), ValidationError> {
    let coord = Coordinate::new(lat, lng)?;
    let month = parse_optional_month(month)?;
    Ok((coord, month))
}

/// Blank input means "no month", matching an empty month field.
fn parse_optional_month(month: Option<&str>) -> Result<Option<MonthPeriod>, ValidationError> {
    match month.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(MonthPeriod::parse(s)?)),
    }
}

fn location_params(coord: &Coordinate, month: Option<&MonthPeriod>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("lat", coord.lat().to_string()),
        ("lng", coord.lng().to_string()),
    ];
    if let Some(month) = month {
        params.push(("date", month.to_string()));
    }
    params
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
