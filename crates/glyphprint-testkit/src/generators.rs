//! Proptest generators for property-based testing.

use proptest::prelude::*;

use glyphprint_core::address::ADDRESS_BYTES;
use glyphprint_core::Address;

/// Generate a canonical 40-digit lowercase hex body.
pub fn hex_body() -> impl Strategy<Value = String> {
    "[0-9a-f]{40}".prop_map(String::from)
}

/// Generate a 40-digit hex body in mixed case.
pub fn mixed_case_body() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{40}".prop_map(String::from)
}

/// Generate a valid address string in any accepted spelling.
pub fn address_string() -> impl Strategy<Value = String> {
    (mixed_case_body(), prop_oneof![Just(""), Just("0x"), Just("0X")])
        .prop_map(|(body, prefix)| format!("{}{}", prefix, body))
}

/// Generate a hex string shorter than a canonical address.
pub fn short_hex() -> impl Strategy<Value = String> {
    "[0-9a-f]{0,39}".prop_map(String::from)
}

/// Generate a random [`Address`].
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; ADDRESS_BYTES]>().prop_map(Address::from_bytes)
}

/// Generate a 40-char body with exactly one non-hex character.
pub fn body_with_bad_char() -> impl Strategy<Value = (String, usize)> {
    (hex_body(), 0usize..40, "[g-zG-Z!@# _.-]")
        .prop_map(|(body, position, bad)| {
            let mut chars: Vec<char> = body.chars().collect();
            chars[position] = bad.chars().next().unwrap_or('g');
            (chars.into_iter().collect(), position)
        })
}

/// Generate a hex body of the wrong length.
pub fn wrong_length_body() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9a-f]{1,39}", "[0-9a-f]{41,80}"].prop_map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphprint_core::{fingerprint, is_valid, normalize, AddressError};

    proptest! {
        #[test]
        fn test_generated_addresses_are_valid(s in address_string()) {
            prop_assert!(is_valid(&s));
            let parsed = Address::parse(&s).unwrap();
            let body = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(&s);
            prop_assert_eq!(parsed.as_str(), body.to_ascii_lowercase());
        }

        #[test]
        fn test_is_valid_agrees_with_parse(s in any::<String>()) {
            prop_assert_eq!(is_valid(&s), Address::parse(&s).is_ok());
        }

        #[test]
        fn test_bad_char_is_reported(case in body_with_bad_char()) {
            let (body, position) = case;
            prop_assert!(!is_valid(&body));
            let err = Address::parse(&format!("0x{}", body)).unwrap_err();
            let is_bad_char_at_position = matches!(
                err,
                AddressError::InvalidCharacter { position: p, .. } if p == position
            );
            prop_assert!(is_bad_char_at_position);
        }

        #[test]
        fn test_wrong_length_is_rejected(body in wrong_length_body()) {
            prop_assert!(!is_valid(&body));
            let prefixed = format!("0x{}", body);
            prop_assert!(!is_valid(&prefixed));
        }

        #[test]
        fn test_fingerprint_deterministic(address in address()) {
            prop_assert_eq!(address.fingerprint(), address.fingerprint());
            prop_assert_eq!(fingerprint(address.as_str()), fingerprint(&address.to_prefixed()));
        }

        #[test]
        fn test_canonicalization_idempotent(address in address()) {
            prop_assert_eq!(normalize(address.as_str()), address.as_str());
            prop_assert_eq!(Address::parse(address.as_str()).unwrap(), address.clone());
        }

        #[test]
        fn test_padding_matches_canonical(short in short_hex()) {
            let canonical = format!("{:0>40}", short);
            prop_assert_eq!(fingerprint(&short), fingerprint(&canonical));
        }
    }
}
