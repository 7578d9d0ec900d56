//! Display shortening for addresses.
//!
//! Purely shape-based: no validation, no hashing.

/// Inputs shorter than this many chars are always returned verbatim.
pub const TRUNCATE_AT: usize = 42;

/// Leading chars kept when shortening (includes a `0x` prefix if present).
pub const HEAD_LEN: usize = 6;

/// Trailing chars kept when shortening.
pub const TAIL_LEN: usize = 4;

/// Separator between head and tail.
pub const ELLIPSIS: &str = "...";

/// Produce the display form of `address`.
///
/// With `show_full`, or for inputs under [`TRUNCATE_AT`] chars, the input comes
/// back unchanged. Otherwise the result is the first [`HEAD_LEN`] chars,
/// [`ELLIPSIS`], and the last [`TAIL_LEN`] chars.
pub fn format_address(address: &str, show_full: bool) -> String {
    let len = address.chars().count();
    if show_full || len < TRUNCATE_AT {
        return address.to_owned();
    }

    let head: String = address.chars().take(HEAD_LEN).collect();
    let tail: String = address.chars().skip(len - TAIL_LEN).collect();
    format!("{head}{ELLIPSIS}{tail}")
}
