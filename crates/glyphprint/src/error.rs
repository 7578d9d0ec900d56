//! Error types for Glyphprint.

use glyphprint_core::AddressError;
use thiserror::Error;

/// Errors surfaced by the strict label API.
#[derive(Debug, Error)]
pub enum GlyphprintError {
    /// The input is not a syntactically valid address.
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),
}

/// Result type for Glyphprint operations.
pub type Result<T> = std::result::Result<T, GlyphprintError>;
