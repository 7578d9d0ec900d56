//! # Glyphprint
//!
//! Visual fingerprints for hexadecimal account addresses.
//!
//! ## Overview
//!
//! Two addresses that differ in a single digit look almost identical in a
//! truncated `0x1234...7890` display. Glyphprint pairs each address with four
//! pictographs derived from the whole address, so a swapped or mistyped
//! address stands out at a glance.
//!
//! - **Validation**: [`is_valid`] / [`Address::parse`]
//! - **Formatting**: [`format_address`]
//! - **Fingerprints**: [`fingerprint`] / [`Fingerprint`]
//! - **Labels**: [`render`] / [`AddressLabel`], combining all three
//!
//! ## Usage
//!
//! ```rust
//! use glyphprint::{render, is_valid, LabelConfig};
//!
//! let address = "0x1234567890123456789012345678901234567890";
//! assert!(is_valid(address));
//!
//! let label = render(address, &LabelConfig::default());
//! assert!(label.starts_with("0x1234...7890 "));
//! assert_eq!(label.chars().count(), "0x1234...7890 ".len() + 4);
//! ```
//!
//! Invalid input never panics; it renders with a warning marker instead:
//!
//! ```rust
//! use glyphprint::{render, LabelConfig};
//!
//! assert_eq!(render("0x123", &LabelConfig::default()), "0x123 ❌⚠️❓");
//! ```
//!
//! ## Re-exports
//!
//! - `glyphprint::core` - Core primitives (Address, Fingerprint, palette, hashes)

pub mod error;
pub mod label;

// Re-export component crate
pub use glyphprint_core as core;

// Re-export main types for convenience
pub use error::{GlyphprintError, Result};
pub use label::{render, render_all, AddressLabel, LabelConfig, INVALID_MARKER};

// Re-export commonly used core types
pub use glyphprint_core::{
    fingerprint, format_address, is_valid, Address, AddressError, Fingerprint, FINGERPRINT_LEN,
    PALETTE, PALETTE_SIZE,
};
