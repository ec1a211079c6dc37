//! Pass policies and area permissions
//!
//! This module holds the static rules behind every pass type: which fields an
//! entrant must provide, which park areas and rides a pass opens and what
//! discounts it carries.
//!
//! # Overview
//!
//! - **AreaSet**: compact set of park areas
//! - **PassPolicy**: the rule set for one entrant subtype
//! - **Registry**: exhaustive subtype to policy lookup
//! - **Grants**: project number and company area tables
//!
//! # Usage Example
//!
//! ```rust
//! use park_pass_generator::permissions::*;
//! use park_pass_generator::types::*;
//!
//! let policy = policy_for(EntrantSubtype::HourlyEmployeeFoodServices);
//! assert_eq!(policy.display_name, "Hourly Employee - Food Services Pass");
//!
//! let decision = policy.access_area(ParkArea::Kitchen, AccessContext::default());
//! assert!(decision.is_granted());
//! assert_eq!(policy.discount(DiscountType::Merchandise), 0.25);
//! ```

pub mod area_set;
pub mod grants;
pub mod policy;
pub mod registry;

// Re-export all public types for convenience
pub use area_set::*;
pub use grants::*;
pub use policy::*;
pub use registry::*;
