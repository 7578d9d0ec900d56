//! Address fingerprints: a short pictograph sequence derived from an address.
//!
//! Each output position mixes two structurally different hashes:
//!
//! - a *global* FNV-1a over the whole normalized address plus a per-position
//!   salt, and
//! - a *local* Murmur3-style hash over a 16-unit window that slides with the
//!   position.
//!
//! Reusing one whole-string hash per position makes near-duplicate addresses
//! produce correlated symbols. The local window keeps each position sensitive
//! to its own slice of the address even when the global hashes agree on the
//! low bits the palette index is taken from.
//!
//! The fingerprint is a visual aid only. It is not collision resistant and must
//! never be used for authentication or integrity.

use serde::Serialize;
use std::fmt;

use crate::address::normalize;
use crate::hash::{fnv1a_32, murmur3_32};
use crate::palette::{symbol, PALETTE_SIZE};

/// Number of symbols in a fingerprint.
pub const FINGERPRINT_LEN: usize = 4;

/// Per-position salts. Distinct odd primes; position `p` also multiplies its
/// local hash by the salt of position `p + 1`.
pub const POSITION_SALTS: [u32; FINGERPRINT_LEN] = [97, 101, 103, 107];

/// Offset step between consecutive local windows.
pub const WINDOW_STRIDE: usize = 8;

/// Maximum length of a local window, in UTF-16 code units.
pub const WINDOW_LEN: usize = 16;

/// Local hash seed for position `p` is `p * SEED_STEP`.
pub const SEED_STEP: u32 = 1009;

/// A derived fingerprint: one palette index per position.
///
/// Equality is structural. Serializes as its symbol string; never deserialized,
/// always recomputed from an address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Fingerprint {
    indices: [usize; FINGERPRINT_LEN],
}

impl Fingerprint {
    /// Derive the fingerprint of an arbitrary string.
    ///
    /// Total: any input, including the empty string or non-hex text, produces
    /// a fingerprint. Checking validity first is the caller's job.
    pub fn derive(address: &str) -> Self {
        let units: Vec<u16> = normalize(address).encode_utf16().collect();

        let mut indices = [0usize; FINGERPRINT_LEN];
        for (position, slot) in indices.iter_mut().enumerate() {
            *slot = position_index(&units, position);
        }
        Self { indices }
    }

    /// Palette indices in position order.
    pub const fn indices(&self) -> &[usize; FINGERPRINT_LEN] {
        &self.indices
    }

    /// Symbols in position order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.indices.iter().map(|&i| symbol(i))
    }

    /// Symbol at `position`, if in range.
    pub fn symbol_at(&self, position: usize) -> Option<&'static str> {
        self.indices.get(position).map(|&i| symbol(i))
    }

    /// Number of positions at which two fingerprints differ.
    pub fn distance(&self, other: &Self) -> usize {
        self.indices
            .iter()
            .zip(other.indices.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.symbols() {
            f.write_str(s)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({} {:?})", self, self.indices)
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.to_string()
    }
}

/// Derive the concatenated fingerprint symbols for `address`.
pub fn fingerprint(address: &str) -> String {
    Fingerprint::derive(address).to_string()
}

fn position_index(units: &[u16], position: usize) -> usize {
    let salt = POSITION_SALTS[position];
    let partner = POSITION_SALTS[(position + 1) % FINGERPRINT_LEN];

    let mut salted = Vec::with_capacity(units.len() + 3);
    salted.extend_from_slice(units);
    salted.extend(salt.to_string().encode_utf16());
    let global = fnv1a_32(&salted);

    let start = (position * WINDOW_STRIDE).min(units.len());
    let end = (start + WINDOW_LEN).min(units.len());
    let local = murmur3_32(&units[start..end], position as u32 * SEED_STEP);

    let combined = global.wrapping_mul(salt) ^ local.wrapping_mul(partner);
    // Fold the high half down; the palette index only sees the low bits.
    let folded = combined ^ (combined >> 16);

    (folded as i32).unsigned_abs() as usize % PALETTE_SIZE
}
