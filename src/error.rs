//! Errors raised by the set collections
#![warn(missing_docs)]

use thiserror::Error;

//-----------------------------------------------------------------------------------------------//

/// The ways a set operation can fail.
///
/// Every error is reported to the immediate caller. Apart from the bulk insertions
/// (`try_add_all`), which may already have added some elements, a failing operation leaves the
/// set untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// A required element or collection was absent
    #[error("null argument")]
    NullArgument,

    /// A capacity or capacity increment was less than 1
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An element does not have the type of the elements already in the set
    #[error("element type mismatch")]
    TypeMismatch,

    /// An operation was called while its preconditions did not hold
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// A cursor was advanced past its last element
    #[error("no more elements")]
    EndOfIteration,
}

/// Result type used throughout the crate
pub type Result<T> = core::result::Result<T, SetError>;

//-----------------------------------------------------------------------------------------------//

#[test]
// Messages carry the detail of the failure
fn test_error_0() {
    use alloc::string::ToString;

    debug_assert_eq!(SetError::NullArgument.to_string(), "null argument");
    debug_assert_eq!(
        SetError::InvalidArgument("capacity must be at least 1").to_string(),
        "invalid argument: capacity must be at least 1"
    );
    debug_assert_eq!(
        SetError::IllegalState("cannot strip an empty set").to_string(),
        "illegal state: cannot strip an empty set"
    );
    debug_assert_eq!(SetError::EndOfIteration.to_string(), "no more elements");
}
