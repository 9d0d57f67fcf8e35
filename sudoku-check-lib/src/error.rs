//! Error handling for grid checking operations.
//!
//! This module defines the error type that covers the ways a grid check can
//! fail. The grid itself cannot be "wrong" — an invalid grid is a normal
//! verdict, not an error — so the error cases are limited to API misuse
//! (out-of-range line index) and infrastructure failures (task dispatch,
//! join, timeout). Infrastructure failures are deliberately kept distinct
//! from the validity verdict and must never be reported as "invalid".

use crate::types::LineKind;
use std::fmt;
use std::time::Duration;

/// Main error type for grid checking operations.
#[derive(Debug, Clone)]
pub enum GridCheckError {
    /// A row or column index outside [0, 8] was passed to a per-line check
    LineOutOfRange { kind: LineKind, index: usize },

    /// A check task could not be dispatched or joined (panic, cancellation,
    /// runtime shutdown). Fatal: the overall check is aborted.
    TaskFailure { message: String },

    /// The configured deadline elapsed before all check tasks finished
    Timeout {
        operation: String,
        duration: Duration,
    },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl GridCheckError {
    /// Create a new out-of-range line index error.
    pub fn line_out_of_range(kind: LineKind, index: usize) -> Self {
        Self::LineOutOfRange { kind, index }
    }

    /// Create a new task failure error.
    pub fn task_failure<M: Into<String>>(message: M) -> Self {
        Self::TaskFailure {
            message: message.into(),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error means a check task was lost rather than run to
    /// completion. Such errors must abort the whole check: a silently
    /// skipped line would make the verdict meaningless.
    pub fn is_dispatch_failure(&self) -> bool {
        matches!(self, Self::TaskFailure { .. })
    }
}

impl fmt::Display for GridCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineOutOfRange { kind, index } => {
                write!(f, "{} index {} is out of range (expected 0..=8)", kind, index)
            }
            Self::TaskFailure { message } => {
                write!(f, "Check task failure: {}", message)
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for GridCheckError {}

// Implement From conversions for common error types
impl From<tokio::task::JoinError> for GridCheckError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            Self::task_failure(format!("check task panicked: {}", err))
        } else {
            Self::task_failure(format!("check task was cancelled: {}", err))
        }
    }
}
