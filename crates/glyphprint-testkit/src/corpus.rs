//! Deterministic address corpora for batch checks.
//!
//! Every corpus is reproducible across platforms and runs: diverse addresses
//! come from Blake3 over a counter, never from a PRNG.

use glyphprint_core::address::ADDRESS_BYTES;
use glyphprint_core::Address;

const CORPUS_DOMAIN: &[u8] = b"glyphprint/corpus/v1";

/// `count` structurally unrelated addresses.
pub fn diverse_addresses(count: usize) -> Vec<Address> {
    (0..count as u64)
        .map(|i| {
            let mut hasher = blake3::Hasher::new();
            hasher.update(CORPUS_DOMAIN);
            hasher.update(&i.to_le_bytes());
            let digest = hasher.finalize();

            let mut bytes = [0u8; ADDRESS_BYTES];
            bytes.copy_from_slice(&digest.as_bytes()[..ADDRESS_BYTES]);
            Address::from_bytes(bytes)
        })
        .collect()
}

/// `count` consecutive addresses starting at `start` (`0x00..00`, `0x00..01`, ...).
pub fn sequential_addresses(start: u128, count: usize) -> Vec<Address> {
    (0..count as u128)
        .map(|offset| {
            let value = start.wrapping_add(offset);
            let mut bytes = [0u8; ADDRESS_BYTES];
            bytes[ADDRESS_BYTES - 16..].copy_from_slice(&value.to_be_bytes());
            Address::from_bytes(bytes)
        })
        .collect()
}

/// Every address that differs from `address` in exactly one hex digit.
///
/// Yields `40 * 15 = 600` addresses, in digit-position order.
pub fn single_nibble_edits(address: &Address) -> Vec<Address> {
    let original = address.to_bytes();
    let mut edits = Vec::with_capacity(ADDRESS_BYTES * 2 * 15);

    for nibble in 0..ADDRESS_BYTES * 2 {
        let byte = nibble / 2;
        let high = nibble % 2 == 0;
        let current = if high {
            original[byte] >> 4
        } else {
            original[byte] & 0x0f
        };

        for value in (0u8..16).filter(|&v| v != current) {
            let mut bytes = original;
            bytes[byte] = if high {
                (value << 4) | (original[byte] & 0x0f)
            } else {
                (original[byte] & 0xf0) | value
            };
            edits.push(Address::from_bytes(bytes));
        }
    }

    edits
}
