//! Passes and swipes
//!
//! A [`Pass`] is issued for a validated entrant and answers swipes at area
//! doors, rides and discount registers using the policy for the entrant's
//! subtype. Ride swipes are rate limited by a per-pass cooldown that reads
//! time from an injectable [`Clock`](crate::types::Clock).
//!
//! ```rust
//! use park_pass_generator::entrant::*;
//! use park_pass_generator::pass::*;
//! use park_pass_generator::types::*;
//!
//! let entrant = create_entrant(EntrantSubtype::VipGuest, &RawEntrantFields::new()).unwrap();
//! let mut pass = Pass::create(EntrantSubtype::VipGuest, entrant).unwrap();
//!
//! assert!(pass.swipe_ride(RideAccess::SkipLines, false).success);
//! assert!(!pass.swipe_area(ParkArea::Office).success);
//! assert_eq!(pass.summary().pass_name, "VIP Guest Pass");
//! ```

pub mod error;
#[allow(clippy::module_inception)]
pub mod pass;
pub mod summary;
pub mod swipe;

pub use error::*;
pub use pass::*;
pub use summary::*;
pub use swipe::*;
