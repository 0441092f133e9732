//! Error types for vexsort operations.
//!
//! The engine recovers from every internal resource failure by falling back to
//! a less demanding kernel, so the only errors that reach a caller are contract
//! violations on the request itself.

use std::fmt;

/// Errors that can be reported by the sorting entry points.
///
/// Allocation failures inside the engine never surface here; they trigger an
/// internal fallback (radix → introsort, merge sort → introsort, parallel →
/// sequential) and the call still completes successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The request violated the calling contract.
    ///
    /// The typed Rust surface rules most of these out statically; the variant
    /// exists so foreign-function bindings can report null buffers, zero
    /// element sizes, or missing comparators with the same vocabulary.
    InvalidArgument {
        /// Human-readable error message.
        message: String,
    },
    /// The buffer's element kind is not supported by the engine.
    UnsupportedType {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
            SortError::UnsupportedType { message } => {
                write!(f, "Unsupported element type: {}", message)
            }
        }
    }
}

impl std::error::Error for SortError {}

/// Creates an invalid-argument error.
pub fn invalid_argument(message: impl Into<String>) -> SortError {
    SortError::InvalidArgument {
        message: message.into(),
    }
}

/// Creates an unsupported-type error.
pub fn unsupported_type(message: impl Into<String>) -> SortError {
    SortError::UnsupportedType {
        message: message.into(),
    }
}
