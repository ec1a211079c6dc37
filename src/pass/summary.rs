//! Printable pass summary

use serde::Serialize;
use std::fmt;

use crate::permissions::AreaSet;
use crate::types::PassId;

/// The details printed on a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    /// Pass identifier
    pub pass_id: PassId,
    /// Entrant name, or "???" when not known
    pub full_name: String,
    /// Pass display name
    pub pass_name: String,
    /// Best ride access, as printed
    pub ride_access: String,
    /// Areas the pass opens
    pub areas: AreaSet,
    /// Food discount in whole percent
    pub food_discount_percent: u32,
    /// Merchandise discount in whole percent
    pub merchandise_discount_percent: u32,
}

impl PassSummary {
    /// Shown when the pass allows skipping lines
    pub const SKIP_RIDE_LINES: &'static str = "Skip Ride Lines";
    /// Shown when the pass allows all rides
    pub const UNLIMITED_RIDES: &'static str = "Unlimited Rides";
    /// Shown when the pass has no ride access
    pub const NO_RIDE_ACCESS: &'static str = "No ride access";
    /// Placeholder for an entrant without a full name
    pub const UNKNOWN_NAME: &'static str = "???";
}

impl fmt::Display for PassSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.full_name)?;
        writeln!(f, "{}", self.pass_name)?;
        writeln!(f, "• {}", self.ride_access)?;
        writeln!(f, "• {}% Food Discount", self.food_discount_percent)?;
        writeln!(f, "• {}% Merchandise Discount", self.merchandise_discount_percent)?;
        write!(f, "• Areas: {}", self.areas)
    }
}
