//! Swipe results and cooldown state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Greeting for a granted swipe
pub const WELCOME: &str = "Welcome!";
/// Default denial message
pub const NOT_ALLOWED: &str = "Sorry, you're not allowed in here.";
/// Greeting for a granted swipe on the entrant's birthday
pub const BIRTHDAY_WELCOME: &str = "Welcome and Happy Birthday!";
/// Denial message on the entrant's birthday
pub const BIRTHDAY_NOT_ALLOWED: &str =
    "It may be your birthday, but you're still not allowed in this area.";
/// Denial message for a ride swipe inside the cooldown window
pub const SWIPED_TOO_SOON: &str =
    "You swiped too soon since your last swipe. You'll have to wait some time.";
/// Prefix for a granted skip-the-line ride swipe
pub const SKIP_LINES_PREFIX: &str = "Skip Lines: ";

/// Default message for a swipe, birthday aware
pub fn swipe_message(success: bool, birthday: bool) -> &'static str {
    match (success, birthday) {
        (true, true) => BIRTHDAY_WELCOME,
        (false, true) => BIRTHDAY_NOT_ALLOWED,
        (true, false) => WELCOME,
        (false, false) => NOT_ALLOWED,
    }
}

/// Outcome of an area or ride swipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeResult {
    /// Whether access was granted
    pub success: bool,
    /// Message to show the entrant
    pub message: String,
}

impl SwipeResult {
    /// Create a result
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }

    /// Create a denial
    pub fn denied(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }
}

impl fmt::Display for SwipeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "success: {}, message: {}", self.success, self.message)
    }
}

/// Ride cooldown state of a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum SwipeState {
    /// No cooldown-checked ride swipe yet
    #[default]
    NeverSwiped,
    /// Last cooldown-checked ride swipe, successful or not
    RecentlySwiped {
        /// When it happened
        at: DateTime<Utc>,
    },
}

impl SwipeState {
    /// Time of the last checked swipe
    pub fn last_swipe(&self) -> Option<DateTime<Utc>> {
        match self {
            SwipeState::NeverSwiped => None,
            SwipeState::RecentlySwiped { at } => Some(*at),
        }
    }
}

impl From<Option<DateTime<Utc>>> for SwipeState {
    fn from(at: Option<DateTime<Utc>>) -> Self {
        match at {
            Some(at) => SwipeState::RecentlySwiped { at },
            None => SwipeState::NeverSwiped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_messages() {
        assert_eq!(swipe_message(true, false), "Welcome!");
        assert_eq!(swipe_message(false, false), "Sorry, you're not allowed in here.");
        assert_eq!(swipe_message(true, true), "Welcome and Happy Birthday!");
        assert_eq!(
            swipe_message(false, true),
            "It may be your birthday, but you're still not allowed in this area."
        );
    }

    #[test]
    fn test_swipe_result_display() {
        let result = SwipeResult::new(true, WELCOME);
        assert_eq!(result.to_string(), "success: true, message: Welcome!");
        assert!(!SwipeResult::denied(NOT_ALLOWED).success);
    }

    #[test]
    fn test_swipe_state_conversion() {
        assert_eq!(SwipeState::from(None), SwipeState::NeverSwiped);
        let at = Utc::now();
        let state = SwipeState::from(Some(at));
        assert_eq!(state.last_swipe(), Some(at));
        assert_eq!(SwipeState::default().last_swipe(), None);
    }
}
