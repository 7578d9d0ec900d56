//! Batch statistics over fingerprints.
//!
//! These are distributional properties, checked over whole corpora rather than
//! per call: avalanche under single-digit edits, uniqueness over sequential
//! inputs, and per-position symbol frequencies.

use std::collections::HashSet;

use glyphprint_core::{Address, Fingerprint, FINGERPRINT_LEN, PALETTE_SIZE};

/// Fraction of `edits` whose fingerprint differs from `base`'s in at least half
/// of the positions.
pub fn avalanche_ratio(base: &Address, edits: &[Address]) -> f64 {
    if edits.is_empty() {
        return 0.0;
    }

    let threshold = FINGERPRINT_LEN.div_ceil(2);
    let reference = base.fingerprint();
    let hits = edits
        .iter()
        .filter(|edit| reference.distance(&edit.fingerprint()) >= threshold)
        .count();

    hits as f64 / edits.len() as f64
}

/// Fraction of distinct fingerprints among `addresses`.
pub fn uniqueness_ratio(addresses: &[Address]) -> f64 {
    if addresses.is_empty() {
        return 1.0;
    }

    let distinct: HashSet<Fingerprint> = addresses.iter().map(Address::fingerprint).collect();
    distinct.len() as f64 / addresses.len() as f64
}

/// Symbol counts per fingerprint position.
#[derive(Debug, Clone)]
pub struct PositionHistogram {
    counts: Vec<[usize; PALETTE_SIZE]>,
    samples: usize,
}

impl PositionHistogram {
    /// Tally the fingerprints of `addresses`.
    pub fn from_addresses(addresses: &[Address]) -> Self {
        let mut counts = vec![[0usize; PALETTE_SIZE]; FINGERPRINT_LEN];
        for address in addresses {
            for (position, &index) in address.fingerprint().indices().iter().enumerate() {
                counts[position][index] += 1;
            }
        }
        Self {
            counts,
            samples: addresses.len(),
        }
    }

    /// Number of fingerprints tallied.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Mean count per symbol at a position under a uniform distribution.
    pub fn expected_per_symbol(&self) -> f64 {
        self.samples as f64 / PALETTE_SIZE as f64
    }

    /// Count of `index` at `position`.
    pub fn count(&self, position: usize, index: usize) -> usize {
        self.counts[position][index]
    }

    /// Number of distinct symbols seen at `position`.
    pub fn distinct_at(&self, position: usize) -> usize {
        self.counts[position].iter().filter(|&&c| c > 0).count()
    }

    /// Highest single-symbol count at `position`.
    pub fn max_at(&self, position: usize) -> usize {
        self.counts[position].iter().copied().max().unwrap_or(0)
    }

    /// Lowest single-symbol count at `position`.
    pub fn min_at(&self, position: usize) -> usize {
        self.counts[position].iter().copied().min().unwrap_or(0)
    }
}
