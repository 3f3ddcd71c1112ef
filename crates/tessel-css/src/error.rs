//! Why a shorthand declaration was rejected.

use thiserror::Error;

use crate::shorthand::Side;

/// A shorthand value that could not be expanded to four sides.
///
/// Callers of [`crate::ShorthandProperty::validate_and_apply`] only see a
/// `bool`; this carries the reason for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The value had zero or more than four components.
    #[error("expected 1 to 4 components, found {0}")]
    InvalidComponentCount(usize),

    /// The component at `position` was rejected by the validator for `side`.
    #[error("component {position} is not a valid {side} value")]
    InvalidComponentAtPosition {
        /// Zero-based index into the shorthand's component list.
        position: usize,
        /// The side whose validator rejected it.
        side: Side,
    },
}
