//! Access session runner
//!
//! An [`AccessSession`] issues passes and swipes them against a shared
//! [`ManualClock`], so a whole day at the gate can be replayed in an instant
//! and produce the same events every time.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{Scenario, SessionError, SessionResult, SessionStatistics};
use crate::entrant::{EntrantValidator, RawEntrantFields, ValidationError};
use crate::events::{SwipeEvent, SwipeTarget};
use crate::pass::{Pass, PassSummary};
use crate::types::{Clock, EntrantSubtype, ManualClock, ParkConfig};

/// An entrant that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Name the entrant was registered under
    pub entrant: String,
    /// Requested subtype
    pub subtype: EntrantSubtype,
    /// Validation error category
    pub category: String,
    /// Full error message
    pub message: String,
    /// One line per offending field, or the message
    pub alert_lines: Vec<String>,
}

impl Rejection {
    fn new(entrant: &str, subtype: EntrantSubtype, error: &ValidationError) -> Self {
        Self {
            entrant: entrant.to_string(),
            subtype,
            category: error.category().to_string(),
            message: error.to_string(),
            alert_lines: error.alert_lines(),
        }
    }
}

/// Everything a finished session produced
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// Scenario name, if the session ran one
    pub scenario: Option<String>,
    /// Issued passes, by entrant name
    pub passes: BTreeMap<String, PassSummary>,
    /// Entrants that failed validation
    pub rejections: Vec<Rejection>,
    /// Swipes in the order they happened
    pub events: Vec<SwipeEvent>,
    /// Counters
    pub statistics: SessionStatistics,
}

/// Issues passes and records swipes against a manual clock
#[derive(Debug)]
pub struct AccessSession {
    clock: Arc<ManualClock>,
    validator: EntrantValidator,
    cooldown: Duration,
    passes: BTreeMap<String, Pass>,
    rejected: BTreeSet<String>,
    rejections: Vec<Rejection>,
    events: Vec<SwipeEvent>,
    statistics: SessionStatistics,
}

impl AccessSession {
    /// Create a session starting at `start`
    pub fn new(config: &ParkConfig, start: DateTime<Utc>) -> Self {
        let clock = Arc::new(ManualClock::new(start));
        let validator = EntrantValidator::with_clock(clock.clone())
            .with_options(config.validator_options());

        Self {
            clock,
            validator,
            cooldown: config.cooldown(),
            passes: BTreeMap::new(),
            rejected: BTreeSet::new(),
            rejections: Vec::new(),
            events: Vec::new(),
            statistics: SessionStatistics::new(),
        }
    }

    /// The session clock
    pub fn clock(&self) -> Arc<ManualClock> {
        self.clock.clone()
    }

    /// Move the session clock forward; zero and negative delays are ignored
    pub fn advance(&self, seconds: i64) -> SessionResult<()> {
        if seconds <= 0 {
            return Ok(());
        }
        Duration::try_seconds(seconds)
            .and_then(|delay| self.clock.checked_advance(delay))
            .map(|_| ())
            .ok_or(SessionError::ClockOverflow(seconds))
    }

    /// Validate an entrant and issue a pass under `name`
    ///
    /// A validation failure is recorded and returned as a recoverable
    /// [`SessionError::EntrantRejected`].
    #[instrument(skip(self, raw))]
    pub fn register(
        &mut self,
        name: &str,
        subtype: EntrantSubtype,
        raw: &RawEntrantFields,
    ) -> SessionResult<&Pass> {
        if self.passes.contains_key(name) || self.rejected.contains(name) {
            return Err(SessionError::DuplicateEntrant(name.to_string()));
        }

        let entrant = match self.validator.validate(subtype, raw) {
            Ok(entrant) => entrant,
            Err(error) => {
                self.statistics.record_rejection(&error);
                self.rejections.push(Rejection::new(name, subtype, &error));
                self.rejected.insert(name.to_string());
                return Err(SessionError::EntrantRejected {
                    name: name.to_string(),
                    source: error,
                });
            }
        };

        let pass = Pass::create(subtype, entrant)?
            .with_clock(self.clock.clone())
            .with_cooldown(self.cooldown);
        self.statistics.record_pass(subtype);
        info!(pass_id = %pass.id(), "Registered {} as {}", name, pass.policy().display_name);

        let pass: &Pass = self.passes.entry(name.to_string()).or_insert(pass);
        Ok(pass)
    }

    /// Swipe the pass registered under `name`
    ///
    /// Returns `Ok(None)` when the entrant was rejected earlier, so scripted
    /// checks against them are skipped.
    #[instrument(skip(self))]
    pub fn swipe(&mut self, name: &str, target: SwipeTarget) -> SessionResult<Option<&SwipeEvent>> {
        let Some(pass) = self.passes.get_mut(name) else {
            if self.rejected.contains(name) {
                debug!("Skipping check for rejected entrant");
                self.statistics.record_skipped_check();
                return Ok(None);
            }
            return Err(SessionError::UnknownEntrant(name.to_string()));
        };

        let result = target.swipe(pass);
        let event = SwipeEvent::new(self.clock.now(), name, pass, target, result);
        debug!(success = event.success, "{}", event.message);

        self.statistics.record_event(&event);
        self.events.push(event);
        Ok(self.events.last())
    }

    /// Run every entrant and check of `scenario`
    ///
    /// Rejected entrants are logged and skipped; any other error aborts.
    pub fn run_scenario(&mut self, scenario: &Scenario) -> SessionResult<()> {
        scenario.validate()?;
        info!(
            "Running {} with {} entrants and {} checks",
            scenario.display_name(),
            scenario.entrants.len(),
            scenario.checks.len()
        );

        for entrant in &scenario.entrants {
            match self.register(&entrant.name, entrant.subtype, &entrant.fields) {
                Ok(_) => {}
                Err(error) if error.is_recoverable() => error.log(),
                Err(error) => return Err(error),
            }
        }

        for check in &scenario.checks {
            self.advance(check.after_seconds)?;
            self.swipe(&check.entrant, check.target)?;
        }

        if self.statistics.entrants_rejected > 0 {
            warn!("{} entrants were rejected", self.statistics.entrants_rejected);
        }
        Ok(())
    }

    /// Run `scenario` in a fresh session
    pub fn run(config: &ParkConfig, scenario: &Scenario) -> SessionResult<SessionReport> {
        let start = scenario.start.unwrap_or_else(Utc::now);
        let mut session = Self::new(config, start);
        session.run_scenario(scenario)?;

        let mut report = session.into_report();
        report.scenario = scenario.name.clone();
        Ok(report)
    }

    /// Pass registered under `name`
    pub fn pass(&self, name: &str) -> Option<&Pass> {
        self.passes.get(name)
    }

    /// Swipes so far
    pub fn events(&self) -> &[SwipeEvent] {
        &self.events
    }

    /// Rejected entrants so far
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Counters so far
    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Finish the session
    pub fn into_report(self) -> SessionReport {
        SessionReport {
            scenario: None,
            passes: self
                .passes
                .iter()
                .map(|(name, pass)| (name.clone(), pass.summary()))
                .collect(),
            rejections: self.rejections,
            events: self.events,
            statistics: self.statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntrantField, ParkArea, RideAccess};
    use chrono::TimeZone;

    fn session() -> AccessSession {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        AccessSession::new(&ParkConfig::default(), start)
    }

    const RIDE: SwipeTarget = SwipeTarget::Ride {
        access: RideAccess::AllRides,
        check_interval: true,
    };

    #[test]
    fn test_register_and_swipe() {
        let mut session = session();
        session.register("guest", EntrantSubtype::ClassicGuest, &RawEntrantFields::new()).unwrap();

        let event = session.swipe("guest", RIDE).unwrap().unwrap();
        assert!(event.success);
        assert!(!session.swipe("guest", RIDE).unwrap().unwrap().success);

        session.advance(5).unwrap();
        assert!(session.swipe("guest", RIDE).unwrap().unwrap().success);
        assert_eq!(session.statistics().too_soon_denials, 1);
        assert_eq!(session.events().len(), 3);
    }

    #[test]
    fn test_rejected_entrant_checks_are_skipped() {
        let mut session = session();
        let error = session
            .register("kid", EntrantSubtype::ChildGuest, &RawEntrantFields::new())
            .unwrap_err();
        assert!(error.is_recoverable());
        assert_eq!(session.rejections()[0].alert_lines, vec!["Date of Birth"]);

        let amusement = SwipeTarget::Area {
            area: ParkArea::Amusement,
        };
        let skipped = session.swipe("kid", amusement);
        assert!(skipped.unwrap().is_none());
        assert_eq!(session.statistics().skipped_checks, 1);
    }

    #[test]
    fn test_unknown_and_duplicate_names() {
        let mut session = session();
        assert!(matches!(session.swipe("nobody", RIDE), Err(SessionError::UnknownEntrant(_))));

        session.register("a", EntrantSubtype::VipGuest, &RawEntrantFields::new()).unwrap();
        let again = session.register("a", EntrantSubtype::VipGuest, &RawEntrantFields::new());
        assert!(matches!(again, Err(SessionError::DuplicateEntrant(_))));
    }

    #[test]
    fn test_advance_out_of_range_is_an_error() {
        let session = session();
        let before = session.clock().now();

        assert!(matches!(session.advance(i64::MAX), Err(SessionError::ClockOverflow(_))));
        assert!(matches!(
            session.advance(10_000_000_000_000),
            Err(SessionError::ClockOverflow(_))
        ));
        assert_eq!(session.clock().now(), before);

        session.advance(-5).unwrap();
        assert_eq!(session.clock().now(), before);
    }

    #[test]
    fn test_config_cooldown_applies() {
        let config = ParkConfig {
            cooldown_seconds: 60,
            ..ParkConfig::default()
        };
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        let mut session = AccessSession::new(&config, start);
        session.register("g", EntrantSubtype::ClassicGuest, &RawEntrantFields::new()).unwrap();

        assert!(session.swipe("g", RIDE).unwrap().unwrap().success);
        session.advance(30).unwrap();
        assert!(!session.swipe("g", RIDE).unwrap().unwrap().success);
    }

    #[test]
    fn test_entrant_validated_against_session_date() {
        let mut session = session();
        let raw = RawEntrantFields::new().with(EntrantField::DateOfBirth, "06/15/2019");
        assert!(session.register("five", EntrantSubtype::ChildGuest, &raw).is_err());

        let raw = RawEntrantFields::new().with(EntrantField::DateOfBirth, "06/16/2019");
        let pass = session.register("four", EntrantSubtype::ChildGuest, &raw).unwrap();
        assert_eq!(
            pass.entrant().date_of_visit(),
            chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_report_contains_summaries() {
        let mut session = session();
        let raw = RawEntrantFields::new()
            .with(EntrantField::FirstName, "Grace")
            .with(EntrantField::LastName, "Hopper")
            .with(EntrantField::StreetAddress, "1 Main St")
            .with(EntrantField::City, "Orlando")
            .with(EntrantField::State, "FL")
            .with(EntrantField::ZipCode, "32801");
        session.register("boss", EntrantSubtype::Manager, &raw).unwrap();

        let report = session.into_report();
        let summary = &report.passes["boss"];
        assert_eq!(summary.full_name, "Grace Hopper");
        assert_eq!(summary.pass_name, "Manager Pass");
        assert_eq!(report.statistics.passes_issued, 1);
    }
}
