//! Park Pass Generator
//!
//! Rules engine for amusement park passes: validates entrant information for
//! each kind of entrant, issues passes bound to a fixed policy per entrant
//! subtype, and answers swipes at area doors, ride turnstiles and discount
//! registers.
//!
//! # Overview
//!
//! An entrant is described by up to ten raw text fields. The validator turns
//! them into a typed [`EntrantRecord`] or a [`ValidationError`] naming what
//! to fix. A [`Pass`] issued for the record looks up its [`PassPolicy`] to
//! decide every swipe; ride swipes are rate limited by a cooldown measured
//! with an injectable [`Clock`].
//!
//! ## Key Features
//!
//! - **Layered Validation**: presence, length, format and domain checks, with
//!   every offending field of a layer reported together
//! - **Static Policy Table**: one exhaustive policy per entrant subtype
//! - **Data-Dependent Grants**: contract employees by project number, vendors
//!   by company
//! - **Ride Cooldown**: per-pass swipe interval with a deterministic clock
//! - **Scripted Sessions**: replay entrants and swipes from JSON scenarios
//!
//! ## Quick Start
//!
//! ```rust
//! use park_pass_generator::*;
//!
//! let raw = RawEntrantFields::new()
//!     .with(EntrantField::FirstName, "Grace")
//!     .with(EntrantField::LastName, "Hopper")
//!     .with(EntrantField::StreetAddress, "1 Main St")
//!     .with(EntrantField::City, "Orlando")
//!     .with(EntrantField::State, "FL")
//!     .with(EntrantField::ZipCode, "32801");
//!
//! let entrant = create_entrant(EntrantSubtype::Manager, &raw)?;
//! let pass = Pass::create(EntrantSubtype::Manager, entrant)?;
//!
//! assert!(pass.swipe_area(ParkArea::Office).success);
//! assert_eq!(pass.swipe_discount(DiscountType::Food), 0.25);
//! println!("{}", pass.summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: enums, identifiers, clocks and configuration
//! - [`entrant`]: raw input, validation and entrant records
//! - [`permissions`]: pass policies and area grants
//! - [`pass`]: passes, swipe results and pass summaries
//! - [`events`]: swipe events
//! - [`session`]: scripted sessions, statistics and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod entrant;
pub mod events;
pub mod pass;
pub mod permissions;
pub mod session;
pub mod types;

// Core types and configuration
pub use types::{
    Clock, ConfigValidationError, DiscountType, EntrantField, EntrantKind, EntrantSubtype,
    ManualClock, OutputFormat, ParkArea, ParkConfig, PassId, RideAccess, SystemClock,
};

// Entrants
pub use entrant::{
    create_entrant, EntrantRecord, EntrantValidator, RawEntrantFields, SampleEntrantGenerator,
    ValidationError, ValidatorOptions,
};

// Policies
pub use permissions::{policy_for, required_fields, AreaRule, AreaSet, PassPolicy};

// Passes
pub use pass::{Pass, PassError, PassSummary, SwipeResult, SwipeState};

// Events and sessions
pub use events::{SwipeEvent, SwipeTarget};
pub use session::{AccessSession, Scenario, SessionError, SessionReport, SessionStatistics};
