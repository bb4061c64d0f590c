//! Error types for the round engine.
//!
//! Every error here is recoverable. The engine never ends the process on bad
//! input; callers surface the message and carry on.

use thiserror::Error;

use crate::Phase;

/// Errors returned by [`crate::App`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Speed text is not a usable number.
    #[error("invalid speed value: {input:?}")]
    InvalidSpeedValue {
        /// Text that failed to parse.
        input: String,
    },

    /// Operation not allowed in the current phase.
    #[error("invalid phase: cannot {operation} while {phase:?}")]
    InvalidPhase {
        /// Phase when the operation was attempted.
        phase: Phase,
        /// Operation that was attempted.
        operation: &'static str,
    },
}
