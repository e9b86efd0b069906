//! Error taxonomy for tally
//!
//! The arithmetic core is a total function over the numeric domain, so the
//! taxonomy is deliberately small: errors arise only at the
//! unsupported-operation boundary and at the operand-parsing boundary.
//! There are no transient failure modes, so no variant implies retry or
//! recovery.

use thiserror::Error;

/// Errors surfaced by calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    /// The operation exists on the API surface but has no semantics yet.
    ///
    /// Returned by the reserved placeholders (subtraction, multiplication,
    /// division, the memory registers). Callers get a stable operation
    /// name rather than guessed-at behavior.
    #[error("operation not supported: {operation}")]
    Unsupported {
        /// Name of the unimplemented operation (e.g. "subtract", "memory.store").
        operation: String,
    },

    /// An operand could not be interpreted as a number.
    ///
    /// Raised at the call boundary by text-to-number parsing. Fail fast,
    /// surfaced directly to the caller.
    #[error("invalid operand: {reason}")]
    InvalidOperand {
        /// What was wrong with the operand.
        reason: String,
    },
}

impl TallyError {
    /// Create an Unsupported error for a named operation.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Create an InvalidOperand error.
    pub fn invalid_operand(reason: impl Into<String>) -> Self {
        Self::InvalidOperand {
            reason: reason.into(),
        }
    }
}

/// Result alias used across the workspace.
pub type TallyResult<T> = Result<T, TallyError>;
