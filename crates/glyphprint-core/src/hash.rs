//! Non-cryptographic 32-bit mixing hashes.
//!
//! Both hashes consume UTF-16 code units rather than bytes, so positions and
//! window slicing are defined per character for any `&str`. All arithmetic is
//! wrapping `u32`; the outputs are part of the fingerprint format and must stay
//! bit-exact.
//!
//! These are NOT cryptographic. They exist to spread near-duplicate addresses
//! across the palette, nothing more.

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

const MURMUR_C1: u32 = 0xcc9e_2d51;
const MURMUR_C2: u32 = 0x1b87_3593;
const MURMUR_N: u32 = 0xe654_6b64;

/// FNV-1a over UTF-16 code units.
pub fn fnv1a_32(units: &[u16]) -> u32 {
    units.iter().fold(FNV_OFFSET, |hash, &unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Murmur3-style hash with one mixing round per code unit, followed by the
/// standard `fmix32` finalizer.
pub fn murmur3_32(units: &[u16], seed: u32) -> u32 {
    let mut h1 = seed;

    for &unit in units {
        let mut k1 = u32::from(unit).wrapping_mul(MURMUR_C1);
        k1 = k1.rotate_left(15);
        k1 = k1.wrapping_mul(MURMUR_C2);

        h1 ^= k1;
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(MURMUR_N);
    }

    h1 ^= units.len() as u32;
    fmix32(h1)
}

/// Murmur3 finalization: forces every input bit to affect every output bit.
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}
