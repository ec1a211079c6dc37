//! Swipe events
//!
//! Records of individual swipes produced while running a session, and the
//! targets a pass can be swiped at.
//!
//! # Usage Example
//!
//! ```rust
//! use park_pass_generator::events::*;
//! use park_pass_generator::types::*;
//!
//! let target: SwipeTarget =
//!     serde_json::from_str(r#"{"type": "discount", "kind": "merchandise"}"#).unwrap();
//! assert_eq!(target, SwipeTarget::Discount { kind: DiscountType::Merchandise });
//! ```

pub mod swipe_event;

pub use swipe_event::*;
