//! Unique identifier types for the park pass generator
//!
//! Passes are the only entity that needs an identity: entrants are immutable
//! values owned by exactly one pass.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an issued pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassId(pub Uuid);

impl PassId {
    /// Create a new random pass ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PassId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PASS_{}", self.0.simple())
    }
}

impl Serialize for PassId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PassId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("PASS_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(PassId(uuid))
    }
}
