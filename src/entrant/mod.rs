//! Entrant input, validation and records
//!
//! This module turns the strings typed into the pass terminal into a typed
//! [`EntrantRecord`] or a [`ValidationError`] describing what to fix:
//!
//! - [`RawEntrantFields`]: unvalidated input, blank means absent
//! - [`EntrantValidator`]: layered validation against the subtype's rules
//! - [`EntrantRecord`]: the validated, immutable result
//! - [`SampleEntrantGenerator`]: random input that always validates

pub mod error;
pub mod generator;
pub mod parse;
pub mod raw;
pub mod record;
pub mod validator;

pub use error::*;
pub use generator::*;
pub use raw::*;
pub use record::*;
pub use validator::*;
