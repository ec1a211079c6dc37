//! Swipe targets and swipe events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pass::{Pass, SwipeResult, BIRTHDAY_NOT_ALLOWED, BIRTHDAY_WELCOME, SWIPED_TOO_SOON};
use crate::types::{DiscountType, EntrantSubtype, ParkArea, PassId, RideAccess};

fn default_check_interval() -> bool {
    true
}

/// What a pass is swiped at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SwipeTarget {
    /// The door of a park area
    Area {
        /// Area behind the door
        area: ParkArea,
    },
    /// A ride turnstile
    Ride {
        /// Access kind requested
        access: RideAccess,
        /// Whether the cooldown applies
        #[serde(default = "default_check_interval")]
        check_interval: bool,
    },
    /// A ride turnstile, trying skip-the-line access first
    BestRide,
    /// A register offering a discount
    Discount {
        /// Discount kind
        kind: DiscountType,
    },
}

impl SwipeTarget {
    /// Swipe `pass` at this target
    pub fn swipe(&self, pass: &mut Pass) -> SwipeResult {
        match *self {
            SwipeTarget::Area { area } => pass.swipe_area(area),
            SwipeTarget::Ride { access, check_interval } => pass.swipe_ride(access, check_interval),
            SwipeTarget::BestRide => pass.swipe_best_ride(),
            SwipeTarget::Discount { kind } => pass.swipe_discount_result(kind),
        }
    }

    /// Whether this target is a ride turnstile
    pub fn is_ride(&self) -> bool {
        matches!(self, SwipeTarget::Ride { .. } | SwipeTarget::BestRide)
    }
}

impl fmt::Display for SwipeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeTarget::Area { area } => write!(f, "{} area", area),
            SwipeTarget::Ride { access, check_interval: true } => write!(f, "{} ride", access),
            SwipeTarget::Ride { access, check_interval: false } => {
                write!(f, "{} ride (no cooldown)", access)
            }
            SwipeTarget::BestRide => write!(f, "best ride"),
            SwipeTarget::Discount { kind } => write!(f, "{} discount", kind),
        }
    }
}

/// A swipe that happened during a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeEvent {
    /// When the swipe happened
    pub timestamp: DateTime<Utc>,
    /// Pass that was swiped
    pub pass_id: PassId,
    /// Name the entrant was registered under
    pub entrant: String,
    /// Entrant subtype
    pub subtype: EntrantSubtype,
    /// What the pass was swiped at
    pub target: SwipeTarget,
    /// Whether access or a discount was granted
    pub success: bool,
    /// Message shown to the entrant
    pub message: String,
}

impl SwipeEvent {
    /// Record a swipe of `pass` at `target`
    pub fn new(
        timestamp: DateTime<Utc>,
        entrant: impl Into<String>,
        pass: &Pass,
        target: SwipeTarget,
        result: SwipeResult,
    ) -> Self {
        Self {
            timestamp,
            pass_id: pass.id(),
            entrant: entrant.into(),
            subtype: pass.entrant().subtype(),
            target,
            success: result.success,
            message: result.message,
        }
    }

    /// Check if the swipe was refused for being inside the cooldown window
    pub fn is_too_soon(&self) -> bool {
        !self.success && self.message == SWIPED_TOO_SOON
    }

    /// Check if the entrant got a birthday message
    pub fn is_birthday_greeting(&self) -> bool {
        self.message.ends_with(BIRTHDAY_WELCOME) || self.message == BIRTHDAY_NOT_ALLOWED
    }
}

impl fmt::Display for SwipeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] at {}: {} ({})",
            self.timestamp.format("%H:%M:%S"),
            self.entrant,
            self.subtype,
            self.target,
            if self.success { "granted" } else { "denied" },
            self.message
        )
    }
}
