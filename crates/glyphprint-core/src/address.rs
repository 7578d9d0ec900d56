//! Address validation and canonicalization.
//!
//! [`Address`] is the strongly-typed form: exactly 40 lowercase hex digits, no
//! prefix. Untrusted text crosses into it through [`Address::parse`]; the
//! boolean [`is_valid`] is the same check with the reason discarded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;
use crate::fingerprint::Fingerprint;

/// Number of hex digits in a canonical address.
pub const CANONICAL_LEN: usize = 40;

/// Number of bytes an address encodes.
pub const ADDRESS_BYTES: usize = CANONICAL_LEN / 2;

/// Conventional display prefix.
pub const PREFIX: &str = "0x";

/// A canonical account address: 40 lowercase hex digits, unprefixed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse untrusted text into a canonical address.
    ///
    /// Accepts an optional `0x` or `0X` prefix followed by exactly 40 hex
    /// digits of either case.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let body = strip_hex_prefix(s);
        if body.is_empty() {
            return Err(AddressError::Empty);
        }

        // Count chars, not bytes, so the reported length matches what a user sees.
        let got = body.chars().count();
        if got != CANONICAL_LEN {
            return Err(AddressError::InvalidLength {
                expected: CANONICAL_LEN,
                got,
            });
        }

        if let Some((position, character)) =
            body.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(AddressError::InvalidCharacter {
                character,
                position,
            });
        }

        Ok(Self(body.to_ascii_lowercase()))
    }

    /// Build an address from its 20 raw bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Decode the address into its 20 raw bytes.
    pub fn to_bytes(&self) -> [u8; ADDRESS_BYTES] {
        let mut out = [0u8; ADDRESS_BYTES];
        // Infallible: the constructor guarantees 40 hex digits.
        if hex::decode_to_slice(&self.0, &mut out).is_err() {
            unreachable!("canonical address is always valid hex");
        }
        out
    }

    /// Canonical form: 40 lowercase hex digits, no prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical form with the `0x` prefix.
    pub fn to_prefixed(&self) -> String {
        format!("{}{}", PREFIX, self.0)
    }

    /// Derive the pictograph fingerprint of this address.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::derive(&self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{}…)", &self.0[..8])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_prefixed()
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Whether `address` is a syntactically valid address.
///
/// Total: malformed input yields `false`, never a panic.
pub fn is_valid(address: &str) -> bool {
    Address::parse(address).is_ok()
}

/// Lenient normalization used on the fingerprint path.
///
/// Lowercases, strips a leading `0x`, and left-pads with `'0'` up to
/// [`CANONICAL_LEN`]. Width is counted in UTF-16 code units, the unit the
/// fingerprint hashes consume. Never rejects input; idempotent on anything it
/// returns for a prefix-free or canonical address.
pub fn normalize(address: &str) -> String {
    let lowered = address.to_lowercase();
    let body = lowered.strip_prefix(PREFIX).unwrap_or(&lowered);

    let width = body.encode_utf16().count();
    if width >= CANONICAL_LEN {
        return body.to_owned();
    }

    let mut padded = String::with_capacity(CANONICAL_LEN);
    padded.extend(std::iter::repeat('0').take(CANONICAL_LEN - width));
    padded.push_str(body);
    padded
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "1234567890123456789012345678901234567890";

    #[test]
    fn test_valid_with_and_without_prefix() {
        assert!(is_valid("0x1234567890123456789012345678901234567890"));
        assert!(is_valid(BODY));
        assert!(is_valid("0xabcdefABCDEF1234567890123456789012345678"));
        assert!(is_valid("0X1234567890123456789012345678901234567890"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid(""));
        assert_eq!(Address::parse(""), Err(AddressError::Empty));
        assert_eq!(Address::parse("0x"), Err(AddressError::Empty));
    }

    #[test]
    fn test_absent_input_is_invalid() {
        let absent: Option<&str> = None;
        assert!(!absent.map_or(false, is_valid));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid("0x123"));
        assert!(!is_valid("0x123456789012345678901234567890123456789"));
        assert!(!is_valid("0x12345678901234567890123456789012345678901"));
        assert_eq!(
            Address::parse("0x123456789012345678901234567890123456789"),
            Err(AddressError::InvalidLength {
                expected: 40,
                got: 39
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AddressError::Empty.to_string(), "address is empty");
        assert_eq!(
            AddressError::InvalidLength {
                expected: 40,
                got: 39
            }
            .to_string(),
            "invalid address length: expected 40 hex digits, got 39"
        );
        assert_eq!(
            AddressError::InvalidCharacter {
                character: 'z',
                position: 38
            }
            .to_string(),
            "invalid hex character 'z' at position 38"
        );
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(!is_valid("0x123456789012345678901234567890123456789g"));
        assert_eq!(
            Address::parse("0x12345678901234567890123456789012345678z0"),
            Err(AddressError::InvalidCharacter {
                character: 'z',
                position: 38
            })
        );
    }

    #[test]
    fn test_rejects_multibyte_without_panicking() {
        let body = "é".repeat(40);
        assert!(matches!(
            Address::parse(&body),
            Err(AddressError::InvalidCharacter { position: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_double_prefix_and_whitespace() {
        assert!(!is_valid("0x0x12345678901234567890123456789012345678"));
        assert!(!is_valid(" 0x1234567890123456789012345678901234567890"));
    }

    #[test]
    fn test_parse_canonicalizes_case() {
        let addr = Address::parse("0xABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD").unwrap();
        assert_eq!(addr.as_str(), "abcdefabcdefabcdefabcdefabcdefabcdefabcd");
        assert_eq!(
            addr.to_prefixed(),
            "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd"
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let addr = Address::parse(BODY).unwrap();
        let again = Address::parse(addr.as_str()).unwrap();
        assert_eq!(addr, again);
        assert_eq!(Address::parse(&addr.to_string()).unwrap(), addr);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let addr = Address::from_bytes([0xab; 20]);
        assert_eq!(addr.as_str(), "ab".repeat(20));
        assert_eq!(addr.to_bytes(), [0xab; 20]);
    }

    #[test]
    fn test_display_and_debug() {
        let addr = Address::parse(BODY).unwrap();
        assert_eq!(format!("{}", addr), format!("0x{}", BODY));
        assert_eq!(format!("{:?}", addr), "Address(0x12345678…)");
    }

    #[test]
    fn test_serde_uses_prefixed_string() {
        let addr = Address::parse(BODY).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"0x{}\"", BODY));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);

        assert!(serde_json::from_str::<Address>("\"0x1234\"").is_err());
    }

    #[test]
    fn test_normalize_strips_lowercases_and_pads() {
        assert_eq!(
            normalize("0xABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD"),
            "abcdefabcdefabcdefabcdefabcdefabcdefabcd"
        );
        assert_eq!(normalize("0x1"), format!("{}1", "0".repeat(39)));
        assert_eq!(normalize(""), "0".repeat(40));
        assert_eq!(normalize("0X1"), normalize("0x1"));
    }

    #[test]
    fn test_normalize_keeps_long_input() {
        let long = "a".repeat(41);
        assert_eq!(normalize(&long), long);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["", "0x1", BODY, "0xABC", "not an address"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {:?}", input);
        }
    }
}
