//! Error types for Glyphprint Core.

use thiserror::Error;

/// Reasons a string is not a syntactically valid address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Nothing left after stripping the prefix.
    #[error("address is empty")]
    Empty,

    /// Body is not exactly 40 chars long.
    #[error("invalid address length: expected {expected} hex digits, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// Body contains a char outside `[0-9a-fA-F]`.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
