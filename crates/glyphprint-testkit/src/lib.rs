//! # Glyphprint Testkit
//!
//! Testing utilities for Glyphprint.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Pinned palette indices for reference inputs
//! - **Generators**: Proptest strategies for valid and invalid addresses
//! - **Corpora**: Deterministic diverse, sequential, and near-duplicate address sets
//! - **Statistics**: Avalanche, uniqueness, and per-position frequency checks
//!
//! ## Golden Vectors
//!
//! ```rust
//! use glyphprint_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, actual);
//! }
//! ```
//!
//! ## Distribution Checks
//!
//! ```rust
//! use glyphprint_core::Address;
//! use glyphprint_testkit::corpus::single_nibble_edits;
//! use glyphprint_testkit::stats::avalanche_ratio;
//!
//! let base = Address::from_bytes([0x42; 20]);
//! let ratio = avalanche_ratio(&base, &single_nibble_edits(&base));
//! assert!(ratio >= 0.4);
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use glyphprint_testkit::generators::address;
//!
//! proptest! {
//!     #[test]
//!     fn fingerprint_is_deterministic(a in address()) {
//!         prop_assert_eq!(a.fingerprint(), a.fingerprint());
//!     }
//! }
//! ```

pub mod corpus;
pub mod generators;
pub mod stats;
pub mod vectors;

pub use corpus::{diverse_addresses, sequential_addresses, single_nibble_edits};
pub use stats::{avalanche_ratio, uniqueness_ratio, PositionHistogram};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
