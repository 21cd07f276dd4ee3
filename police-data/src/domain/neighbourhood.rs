//! Neighbourhood policing teams.

use serde::Serialize;

/// A sub-force geographic policing unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbourhood {
    pub id: String,
    pub name: String,
}
