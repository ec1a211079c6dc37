//! Session error types
//!
//! Errors raised while loading or running a scripted session. Entrant
//! validation failures are recoverable: the session records them and moves
//! on. Everything else aborts the run.

use thiserror::Error;
use tracing::{error, warn};

use crate::entrant::ValidationError;
use crate::pass::PassError;

/// Errors that can occur while running a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// An entrant in the scenario failed validation
    #[error("Entrant \"{name}\" rejected: {source}")]
    EntrantRejected {
        /// Scenario name of the entrant
        name: String,
        /// Why validation failed
        #[source]
        source: ValidationError,
    },

    /// A pass could not be issued
    #[error("Pass error: {0}")]
    Pass(#[from] PassError),

    /// A check names an entrant the scenario does not define
    #[error("Unknown entrant in check: {0}")]
    UnknownEntrant(String),

    /// Two scenario entrants share a name
    #[error("Duplicate entrant name: {0}")]
    DuplicateEntrant(String),

    /// A check moves the clock backwards
    #[error("Check {index} has a negative delay of {seconds} seconds")]
    NegativeDelay {
        /// Position of the check in the scenario
        index: usize,
        /// The offending delay
        seconds: i64,
    },

    /// A check waits longer than a scenario allows
    #[error("Check {index} has a delay of {seconds} seconds, more than the maximum of {max}")]
    DelayOutOfRange {
        /// Position of the check in the scenario
        index: usize,
        /// The offending delay
        seconds: i64,
        /// The longest accepted delay
        max: i64,
    },

    /// Advancing the session clock would leave the supported date range
    #[error("Cannot advance the session clock by {0} seconds")]
    ClockOverflow(i64),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SessionError {
    /// Check if the session can continue after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::EntrantRejected { .. } => true,
            SessionError::Pass(_)
            | SessionError::UnknownEntrant(_)
            | SessionError::DuplicateEntrant(_)
            | SessionError::NegativeDelay { .. }
            | SessionError::DelayOutOfRange { .. }
            | SessionError::ClockOverflow(_)
            | SessionError::IoError(_)
            | SessionError::SerializationError(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SessionError::EntrantRejected { source, .. } => source.category(),
            SessionError::Pass(_) => "Pass",
            SessionError::UnknownEntrant(_)
            | SessionError::DuplicateEntrant(_)
            | SessionError::NegativeDelay { .. }
            | SessionError::DelayOutOfRange { .. } => "Scenario",
            SessionError::ClockOverflow(_) => "Clock",
            SessionError::IoError(_) => "IO",
            SessionError::SerializationError(_) => "Serialization",
        }
    }

    /// Log the error at a level matching its severity
    pub fn log(&self) {
        if self.is_recoverable() {
            warn!(category = self.category(), "{}", self);
        } else {
            error!(category = self.category(), "{}", self);
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
