//! Error types.
//!
//! Layout attributes are validated when they are set, so rendering itself
//! never fails. The only failure a caller sees from a [`Rect`](crate::Rect)
//! is a [`ValidationError`] from one of its mutators.

use thiserror::Error;

/// A rejected attribute mutation.
///
/// The rect keeps its previous value whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An edge mask outside the 4-bit range.
    #[error("illegal 4-bit {field} value: {value}")]
    MaskOutOfRange { field: &'static str, value: i64 },

    /// Outline definitions are exactly six glyphs.
    #[error("outline definition must have exactly 6 characters, got {len}")]
    OutlineLength { len: usize },

    /// Content dimensions must be strictly positive.
    #[error("dimensions can only be positive integers, got ({width}, {height})")]
    NonPositiveDimension { width: i32, height: i32 },

    /// Position, padding or margin component below zero.
    #[error("{field} values cannot be negative, got {value}")]
    Negative { field: &'static str, value: i32 },
}

/// Errors from reading a [`Slot`](crate::Slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot has never been set")]
    Unset,
}
