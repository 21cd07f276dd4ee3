//! Client for the UK police open data API.
//!
//! Fetches forces, street-level crimes, crime categories, neighbourhoods
//! and stop-and-searches from data.police.uk, turns the JSON into typed
//! records, and breaks crime results down by category.

pub mod domain;
pub mod police;
pub mod report;
pub mod stats;
pub mod transport;
