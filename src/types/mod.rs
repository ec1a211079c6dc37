//! Core types and identifiers for the park pass generator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the rules engine.
//!
//! # Overview
//!
//! - **Enums**: Entrant subtypes and kinds, entrant fields, park areas, ride
//!   access and discount kinds
//! - **Identifiers**: UUID-based pass identifiers
//! - **Configuration**: Park configuration with validation and CLI support
//! - **Clock**: Injectable time source for ages, birthdays and cooldowns
//!
//! # Usage Example
//!
//! ```rust
//! use park_pass_generator::types::*;
//!
//! let subtype: EntrantSubtype = "vip".parse().unwrap();
//! assert_eq!(subtype.kind(), EntrantKind::Guest);
//! assert_eq!(EntrantField::ProjectNumber.display_name(), "Project #");
//!
//! let config = ParkConfig { cooldown_seconds: 10, ..Default::default() };
//! assert!(config.validate().is_ok());
//! ```

pub mod clock;
pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use clock::*;
pub use config::*;
pub use enums::*;
pub use identifiers::*;
