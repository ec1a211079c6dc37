//! Pass issuing errors

use thiserror::Error;

use crate::types::EntrantSubtype;

/// Reasons a pass could not be issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassError {
    /// The entrant record was validated for a different subtype
    #[error("Cannot issue a {requested} pass for an entrant validated as {entrant}")]
    SubtypeMismatch {
        /// Subtype of the requested pass
        requested: EntrantSubtype,
        /// Subtype the entrant was validated for
        entrant: EntrantSubtype,
    },
}
