//! Scripted access sessions
//!
//! This module replays a day at the park gate: it validates a list of
//! entrants, issues their passes and runs scripted swipes against a shared
//! manual clock, collecting events and statistics along the way.
//!
//! # Overview
//!
//! - **Scenario**: JSON description of entrants and checks
//! - **AccessSession**: issues passes and records swipe events
//! - **SessionStatistics**: counters for passes, rejections and swipes
//! - **SessionError**: errors that skip an entrant or abort the run
//! - **LoggingConfig**: tracing subscriber setup for the binary
//!
//! # Usage Example
//!
//! ```rust
//! use park_pass_generator::session::*;
//! use park_pass_generator::types::*;
//!
//! let scenario = Scenario::from_json(r#"{
//!     "start": "2024-06-15T09:00:00Z",
//!     "entrants": [{"name": "vip", "subtype": "vip_guest"}],
//!     "checks": [
//!         {"entrant": "vip", "target": {"type": "ride", "access": "skip_lines"}},
//!         {"entrant": "vip", "target": {"type": "ride", "access": "skip_lines"}, "after_seconds": 1}
//!     ]
//! }"#).unwrap();
//!
//! let report = AccessSession::run(&ParkConfig::default(), &scenario).unwrap();
//! assert_eq!(report.statistics.ride_grants, 1);
//! assert_eq!(report.statistics.too_soon_denials, 1);
//! ```

pub mod error;
pub mod logging;
pub mod runner;
pub mod scenario;
pub mod statistics;

pub use error::*;
pub use logging::*;
pub use runner::*;
pub use scenario::*;
pub use statistics::*;
