//! Park pass
//!
//! A [`Pass`] binds one validated entrant to the policy for its subtype and
//! owns the ride cooldown state. Area and discount swipes are pure lookups;
//! only cooldown-checked ride swipes mutate the pass.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::swipe::{swipe_message, SKIP_LINES_PREFIX, SWIPED_TOO_SOON};
use super::{PassError, PassSummary, SwipeResult, SwipeState};
use crate::entrant::EntrantRecord;
use crate::permissions::{policy_for, AccessContext, AreaSet, PassPolicy};
use crate::types::{
    cooldown, Clock, DiscountType, EntrantSubtype, ParkArea, PassId, RideAccess, SystemClock,
};

/// Access credential for one entrant
#[derive(Debug, Clone)]
pub struct Pass {
    id: PassId,
    policy: &'static PassPolicy,
    entrant: EntrantRecord,
    swipe_state: SwipeState,
    clock: Arc<dyn Clock>,
    cooldown: Duration,
}

impl Pass {
    /// Issue a pass for the subtype the entrant was validated as
    pub fn new(entrant: EntrantRecord) -> Self {
        let policy = policy_for(entrant.subtype());
        Self {
            id: PassId::new(),
            policy,
            entrant,
            swipe_state: SwipeState::NeverSwiped,
            clock: Arc::new(SystemClock),
            cooldown: Duration::seconds(cooldown::DEFAULT_SECONDS as i64),
        }
    }

    /// Issue a pass of `subtype` for `entrant`
    ///
    /// Fails when the entrant was validated for another subtype, since its
    /// required fields were checked against that subtype's rules.
    pub fn create(subtype: EntrantSubtype, entrant: EntrantRecord) -> Result<Self, PassError> {
        if entrant.subtype() != subtype {
            return Err(PassError::SubtypeMismatch {
                requested: subtype,
                entrant: entrant.subtype(),
            });
        }
        let pass = Self::new(entrant);
        info!(pass_id = %pass.id, subtype = %subtype, "Issued {}", pass.policy.display_name);
        Ok(pass)
    }

    /// Use `clock` for "now" and "today"
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Minimum time between two cooldown-checked ride swipes
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Pass identifier
    pub fn id(&self) -> PassId {
        self.id
    }

    /// The entrant this pass was issued to
    pub fn entrant(&self) -> &EntrantRecord {
        &self.entrant
    }

    /// The policy bound to this pass
    pub fn policy(&self) -> &'static PassPolicy {
        self.policy
    }

    /// Current cooldown state
    pub fn swipe_state(&self) -> SwipeState {
        self.swipe_state
    }

    /// Time of the last cooldown-checked ride swipe
    pub fn last_swipe_time(&self) -> Option<DateTime<Utc>> {
        self.swipe_state.last_swipe()
    }

    /// Overwrite the last swipe time
    pub fn set_last_swipe_time(&mut self, at: Option<DateTime<Utc>>) {
        self.swipe_state = SwipeState::from(at);
    }

    fn context(&self) -> AccessContext<'_> {
        AccessContext {
            project_number: self.entrant.project_number(),
            company: self.entrant.company(),
        }
    }

    fn is_birthday(&self) -> bool {
        self.entrant.is_birthday_on(self.clock.today()).unwrap_or(false)
    }

    /// Areas this pass opens; empty when the entrant's project or company is
    /// not on the grant table
    pub fn granted_areas(&self) -> AreaSet {
        self.policy.granted_areas(self.context()).unwrap_or_default()
    }

    /// Swipe at the door of `area`
    #[instrument(skip(self), fields(pass_id = %self.id))]
    pub fn swipe_area(&self, area: ParkArea) -> SwipeResult {
        let decision = self.policy.access_area(area, self.context());
        let success = decision.is_granted();
        let message = match decision.message() {
            Some(message) => message.to_string(),
            None => swipe_message(success, self.is_birthday()).to_string(),
        };

        debug!(success, "Area swipe");
        SwipeResult::new(success, message)
    }

    /// Swipe at a ride
    ///
    /// With `check_interval`, a granted swipe inside the cooldown window is
    /// refused and restarts the window. Denied or unchecked swipes leave the
    /// cooldown state alone.
    #[instrument(skip(self), fields(pass_id = %self.id))]
    pub fn swipe_ride(&mut self, access: RideAccess, check_interval: bool) -> SwipeResult {
        let granted = self.policy.access_ride(access);

        if granted && check_interval {
            let now = self.clock.now();
            let too_soon = self
                .swipe_state
                .last_swipe()
                .is_some_and(|last| now.signed_duration_since(last) < self.cooldown);
            self.swipe_state = SwipeState::RecentlySwiped { at: now };

            if too_soon {
                info!("Ride swipe refused, inside cooldown window");
                return SwipeResult::denied(SWIPED_TOO_SOON);
            }
        }

        debug!(success = granted, "Ride swipe");
        SwipeResult::new(granted, swipe_message(granted, self.is_birthday()))
    }

    /// Swipe for the best ride access the pass has
    ///
    /// Tries skip-the-line access first and falls back to regular access.
    pub fn swipe_best_ride(&mut self) -> SwipeResult {
        let skip = self.swipe_ride(RideAccess::SkipLines, true);
        if skip.success {
            return SwipeResult::new(true, format!("{}{}", SKIP_LINES_PREFIX, skip.message));
        }
        self.swipe_ride(RideAccess::AllRides, true)
    }

    /// Discount for `kind`, 0.0 to 1.0
    pub fn swipe_discount(&self, kind: DiscountType) -> f32 {
        self.policy.discount(kind)
    }

    /// Discount swipe as a result, e.g. "25% discount"
    pub fn swipe_discount_result(&self, kind: DiscountType) -> SwipeResult {
        let discount = self.swipe_discount(kind);
        SwipeResult::new(discount > 0.001, format!("{}% discount", percent(discount)))
    }

    /// What gets printed on the pass
    pub fn summary(&self) -> PassSummary {
        let ride_access = if self.policy.access_ride(RideAccess::SkipLines) {
            PassSummary::SKIP_RIDE_LINES
        } else if self.policy.access_ride(RideAccess::AllRides) {
            PassSummary::UNLIMITED_RIDES
        } else {
            PassSummary::NO_RIDE_ACCESS
        };

        PassSummary {
            pass_id: self.id,
            full_name: self
                .entrant
                .full_name()
                .unwrap_or_else(|| PassSummary::UNKNOWN_NAME.to_string()),
            pass_name: self.policy.display_name.to_string(),
            ride_access: ride_access.to_string(),
            areas: self.granted_areas(),
            food_discount_percent: percent(self.swipe_discount(DiscountType::Food)),
            merchandise_discount_percent: percent(self.swipe_discount(DiscountType::Merchandise)),
        }
    }
}

fn percent(discount: f32) -> u32 {
    (discount * 100.0).round() as u32
}
