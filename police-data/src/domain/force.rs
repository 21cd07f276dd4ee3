//! Police force types.

use std::fmt;

use serde::Serialize;

/// Error returned when a force identifier cannot be used in a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid force id: {reason}")]
pub struct InvalidForceId {
    reason: &'static str,
}

/// Slug identifying a police force, e.g. `leicestershire`.
///
/// The id is interpolated into request paths, so it must be non-blank and
/// must not contain `/`, `?` or `#`. Whether the force actually exists is
/// left to the upstream service.
///
/// # Examples
///
/// ```
/// use police_data::domain::ForceId;
///
/// let id = ForceId::parse(" metropolitan ").unwrap();
/// assert_eq!(id.as_str(), "metropolitan");
///
/// assert!(ForceId::parse("").is_err());
/// assert!(ForceId::parse("a/b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ForceId(String);

impl ForceId {
    /// Parse a force id, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidForceId> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidForceId {
                reason: "force id cannot be empty",
            });
        }
        if s.contains(['/', '?', '#']) {
            return Err(InvalidForceId {
                reason: "force id cannot contain '/', '?' or '#'",
            });
        }
        Ok(ForceId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ForceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForceId({})", self.0)
    }
}

impl fmt::Display for ForceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A UK police force.
///
/// The force list endpoint only supplies `id` and `name`; the remaining
/// fields are populated by the force detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Force {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub telephone: Option<String>,
    pub engagement_methods: Vec<EngagementMethod>,
}

/// A way of contacting or following a force (website, social media, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementMethod {
    pub title: String,
    pub url: Option<String>,
    pub description: Option<String>,
}
