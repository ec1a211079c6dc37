//! Scripted session scenarios
//!
//! A scenario lists named entrants and an ordered series of swipe checks.
//! Each check may first move the session clock forward, which is how
//! cooldown behaviour is exercised without waiting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use super::{SessionError, SessionResult};
use crate::entrant::RawEntrantFields;
use crate::events::SwipeTarget;
use crate::types::{cooldown, EntrantSubtype};

/// Longest a single check may advance the session clock, one day
pub const MAX_CHECK_DELAY_SECONDS: i64 = cooldown::MAX_SECONDS as i64 * 24;

/// An entrant to issue a pass for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioEntrant {
    /// Name used by checks to refer to this entrant
    pub name: String,
    /// Requested pass subtype
    pub subtype: EntrantSubtype,
    /// Raw field input
    #[serde(default)]
    pub fields: RawEntrantFields,
}

/// One swipe in a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioCheck {
    /// Entrant whose pass is swiped
    pub entrant: String,
    /// What the pass is swiped at
    pub target: SwipeTarget,
    /// Seconds to advance the clock before swiping
    #[serde(default)]
    pub after_seconds: i64,
}

/// A scripted session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Session start; the current time when unset
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// Entrants, validated in order
    #[serde(default)]
    pub entrants: Vec<ScenarioEntrant>,
    /// Checks, run in order
    #[serde(default)]
    pub checks: Vec<ScenarioCheck>,
}

impl Scenario {
    /// Parse a scenario from JSON and check its references
    pub fn from_json(json: &str) -> SessionResult<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SessionResult<Self> {
        let path = path.as_ref();
        debug!("Loading scenario from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check entrant names are unique, every check refers to a declared
    /// entrant, and every delay is between zero and a day
    pub fn validate(&self) -> SessionResult<()> {
        let mut names = BTreeSet::new();
        for entrant in &self.entrants {
            if !names.insert(entrant.name.as_str()) {
                return Err(SessionError::DuplicateEntrant(entrant.name.clone()));
            }
        }

        for (index, check) in self.checks.iter().enumerate() {
            if !names.contains(check.entrant.as_str()) {
                return Err(SessionError::UnknownEntrant(check.entrant.clone()));
            }
            if check.after_seconds < 0 {
                return Err(SessionError::NegativeDelay {
                    index,
                    seconds: check.after_seconds,
                });
            }
            if check.after_seconds > MAX_CHECK_DELAY_SECONDS {
                return Err(SessionError::DelayOutOfRange {
                    index,
                    seconds: check.after_seconds,
                    max: MAX_CHECK_DELAY_SECONDS,
                });
            }
        }

        Ok(())
    }

    /// Display name, or "unnamed scenario"
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed scenario")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntrantField, ParkArea};

    const SCENARIO: &str = r#"{
        "name": "Front gate",
        "start": "2024-06-15T09:00:00Z",
        "entrants": [
            {"name": "kid", "subtype": "child_guest", "fields": {"date_of_birth": "01/02/2021"}},
            {"name": "vip", "subtype": "vip_guest"}
        ],
        "checks": [
            {"entrant": "kid", "target": {"type": "area", "area": "amusement"}},
            {"entrant": "vip", "target": {"type": "best_ride"}, "after_seconds": 3}
        ]
    }"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();
        assert_eq!(scenario.display_name(), "Front gate");
        assert_eq!(scenario.entrants.len(), 2);
        assert_eq!(
            scenario.entrants[0].fields.present(EntrantField::DateOfBirth),
            Some("01/02/2021")
        );
        assert_eq!(
            scenario.checks[0].target,
            SwipeTarget::Area {
                area: ParkArea::Amusement
            }
        );
        assert_eq!(scenario.checks[0].after_seconds, 0);
        assert_eq!(scenario.checks[1].after_seconds, 3);
    }

    #[test]
    fn test_unknown_entrant_rejected() {
        let json = r#"{"entrants": [], "checks": [{"entrant": "ghost", "target": {"type": "best_ride"}}]}"#;
        assert!(matches!(
            Scenario::from_json(json),
            Err(SessionError::UnknownEntrant(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_duplicate_entrant_rejected() {
        let json = r#"{"entrants": [
            {"name": "a", "subtype": "classic_guest"},
            {"name": "a", "subtype": "vip_guest"}
        ]}"#;
        assert!(matches!(Scenario::from_json(json), Err(SessionError::DuplicateEntrant(_))));
    }

    #[test]
    fn test_negative_delay_rejected() {
        let json = r#"{
            "entrants": [{"name": "a", "subtype": "classic_guest"}],
            "checks": [{"entrant": "a", "target": {"type": "best_ride"}, "after_seconds": -1}]
        }"#;
        assert!(matches!(
            Scenario::from_json(json),
            Err(SessionError::NegativeDelay { index: 0, seconds: -1 })
        ));
    }

    #[test]
    fn test_oversized_delay_rejected() {
        let json = r#"{
            "entrants": [{"name": "a", "subtype": "classic_guest"}],
            "checks": [
                {"entrant": "a", "target": {"type": "best_ride"}, "after_seconds": 86400},
                {"entrant": "a", "target": {"type": "best_ride"}, "after_seconds": 10000000000000}
            ]
        }"#;
        assert!(matches!(
            Scenario::from_json(json),
            Err(SessionError::DelayOutOfRange {
                index: 1,
                seconds: 10_000_000_000_000,
                max: 86_400,
            })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Scenario::from_json("{ not json"),
            Err(SessionError::SerializationError(_))
        ));
    }
}
