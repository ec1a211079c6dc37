//! Session statistics

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::entrant::ValidationError;
use crate::events::{SwipeEvent, SwipeTarget};
use crate::types::EntrantSubtype;

/// Counters collected while running a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatistics {
    /// Passes issued
    pub passes_issued: usize,
    /// Passes issued per subtype
    pub passes_by_subtype: BTreeMap<EntrantSubtype, usize>,
    /// Entrants that failed validation
    pub entrants_rejected: usize,
    /// Rejections per validation error category
    pub rejections_by_category: BTreeMap<String, usize>,
    /// Swipes of any kind
    pub total_swipes: usize,
    /// Area swipes that were granted
    pub area_grants: usize,
    /// Area swipes that were denied
    pub area_denials: usize,
    /// Ride swipes that were granted
    pub ride_grants: usize,
    /// Ride swipes that were denied, including cooldown refusals
    pub ride_denials: usize,
    /// Ride swipes refused inside the cooldown window
    pub too_soon_denials: usize,
    /// Discount swipes
    pub discount_swipes: usize,
    /// Swipes answered with a birthday message
    pub birthday_greetings: usize,
    /// Checks skipped because their entrant was rejected
    pub skipped_checks: usize,
}

impl SessionStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an issued pass
    pub fn record_pass(&mut self, subtype: EntrantSubtype) {
        self.passes_issued += 1;
        *self.passes_by_subtype.entry(subtype).or_insert(0) += 1;
    }

    /// Count a rejected entrant
    pub fn record_rejection(&mut self, error: &ValidationError) {
        self.entrants_rejected += 1;
        *self.rejections_by_category.entry(error.category().to_string()).or_insert(0) += 1;
    }

    /// Count a swipe
    pub fn record_event(&mut self, event: &SwipeEvent) {
        self.total_swipes += 1;

        match (event.target, event.success) {
            (SwipeTarget::Area { .. }, true) => self.area_grants += 1,
            (SwipeTarget::Area { .. }, false) => self.area_denials += 1,
            (SwipeTarget::Ride { .. } | SwipeTarget::BestRide, true) => self.ride_grants += 1,
            (SwipeTarget::Ride { .. } | SwipeTarget::BestRide, false) => self.ride_denials += 1,
            (SwipeTarget::Discount { .. }, _) => self.discount_swipes += 1,
        }

        if event.is_too_soon() {
            self.too_soon_denials += 1;
        }
        if event.is_birthday_greeting() {
            self.birthday_greetings += 1;
        }
    }

    /// Count a skipped check
    pub fn record_skipped_check(&mut self) {
        self.skipped_checks += 1;
    }

    /// Share of area and ride swipes that were granted, 0.0 without any
    pub fn grant_rate(&self) -> f64 {
        let granted = self.area_grants + self.ride_grants;
        let total = granted + self.area_denials + self.ride_denials;
        if total == 0 {
            0.0
        } else {
            granted as f64 / total as f64
        }
    }
}

impl fmt::Display for SessionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Passes issued: {}", self.passes_issued)?;
        for (subtype, count) in &self.passes_by_subtype {
            writeln!(f, "  {}: {}", subtype, count)?;
        }
        writeln!(f, "Entrants rejected: {}", self.entrants_rejected)?;
        for (category, count) in &self.rejections_by_category {
            writeln!(f, "  {}: {}", category, count)?;
        }
        writeln!(f, "Swipes: {}", self.total_swipes)?;
        writeln!(f, "  Areas: {} granted, {} denied", self.area_grants, self.area_denials)?;
        writeln!(
            f,
            "  Rides: {} granted, {} denied ({} too soon)",
            self.ride_grants, self.ride_denials, self.too_soon_denials
        )?;
        writeln!(f, "  Discounts: {}", self.discount_swipes)?;
        writeln!(f, "  Birthday greetings: {}", self.birthday_greetings)?;
        if self.skipped_checks > 0 {
            writeln!(f, "Skipped checks: {}", self.skipped_checks)?;
        }
        write!(f, "Grant rate: {:.1}%", self.grant_rate() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{SWIPED_TOO_SOON, WELCOME};
    use crate::types::{EntrantField, ParkArea, PassId, RideAccess};
    use chrono::Utc;

    fn event(target: SwipeTarget, success: bool, message: &str) -> SwipeEvent {
        SwipeEvent {
            timestamp: Utc::now(),
            pass_id: PassId::new(),
            entrant: "guest".to_string(),
            subtype: EntrantSubtype::ClassicGuest,
            target,
            success,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_record_events() {
        let ride = SwipeTarget::Ride {
            access: RideAccess::AllRides,
            check_interval: true,
        };
        let office = SwipeTarget::Area {
            area: ParkArea::Office,
        };
        let amusement = SwipeTarget::Area {
            area: ParkArea::Amusement,
        };
        let mut stats = SessionStatistics::new();
        stats.record_event(&event(ride, true, WELCOME));
        stats.record_event(&event(ride, false, SWIPED_TOO_SOON));
        stats.record_event(&event(office, false, "no"));
        stats.record_event(&event(amusement, true, "Welcome and Happy Birthday!"));

        assert_eq!(stats.total_swipes, 4);
        assert_eq!(stats.ride_grants, 1);
        assert_eq!(stats.ride_denials, 1);
        assert_eq!(stats.too_soon_denials, 1);
        assert_eq!(stats.area_grants, 1);
        assert_eq!(stats.area_denials, 1);
        assert_eq!(stats.birthday_greetings, 1);
        assert!((stats.grant_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_passes_and_rejections() {
        let mut stats = SessionStatistics::new();
        stats.record_pass(EntrantSubtype::Manager);
        stats.record_pass(EntrantSubtype::Manager);
        stats.record_rejection(&ValidationError::InvalidCompany("Acme2".to_string()));
        stats.record_rejection(&ValidationError::MissingInformation(
            [EntrantField::City].into(),
        ));

        assert_eq!(stats.passes_issued, 2);
        assert_eq!(stats.passes_by_subtype[&EntrantSubtype::Manager], 2);
        assert_eq!(stats.entrants_rejected, 2);
        assert_eq!(stats.rejections_by_category["Invalid Company"], 1);
        assert_eq!(stats.grant_rate(), 0.0);
    }

    #[test]
    fn test_statistics_serialize() {
        let mut stats = SessionStatistics::new();
        stats.record_pass(EntrantSubtype::VipGuest);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["passes_by_subtype"]["vip_guest"], 1);
    }
}
