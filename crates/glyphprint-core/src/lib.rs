//! # Glyphprint Core
//!
//! Pure primitives for Glyphprint: address validation, display formatting, and
//! pictograph fingerprints.
//!
//! This crate contains no I/O, no logging, no global mutable state. Every
//! function is total over its input and safe to call from any thread.
//!
//! ## Key Functions
//!
//! - [`is_valid`] - Is this string a syntactically valid address?
//! - [`format_address`] - Shortened display form (`0x1234...7890`)
//! - [`fingerprint`] - Four palette symbols derived from the address
//!
//! ## Key Types
//!
//! - [`Address`] - Canonical 40-hex-digit address, the typed parse boundary
//! - [`Fingerprint`] - Palette indices for one address
//!
//! ## Not a hash function
//!
//! Fingerprints help humans notice a swapped or mistyped address. They are not
//! collision resistant and must not be used for authentication or integrity.

pub mod address;
pub mod error;
pub mod fingerprint;
pub mod format;
pub mod hash;
pub mod palette;

pub use address::{is_valid, normalize, Address, CANONICAL_LEN};
pub use error::AddressError;
pub use fingerprint::{fingerprint, Fingerprint, FINGERPRINT_LEN};
pub use format::format_address;
pub use palette::{PALETTE, PALETTE_SIZE};
