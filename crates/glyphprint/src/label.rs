//! Address labels: the display form of an address next to its fingerprint.
//!
//! This is the string-level half of the presentation contract. A valid address
//! renders as `{formatted}{separator}{fingerprint}`; anything else renders as
//! the raw input followed by a fixed warning marker, and no fingerprint is
//! shown for it.

use std::fmt;

use glyphprint_core::{format_address, Address, Fingerprint};

use crate::error::Result;

/// Marker appended to inputs that fail validation.
pub const INVALID_MARKER: &str = "\u{274c}\u{26a0}\u{fe0f}\u{2753}";

/// Configuration for label rendering.
#[derive(Debug, Clone)]
pub struct LabelConfig {
    /// Show the whole address instead of `0x1234...7890`.
    pub show_full_address: bool,
    /// Placed between the formatted address and the fingerprint.
    pub separator: String,
    /// Shown after inputs that are not valid addresses.
    pub invalid_marker: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            show_full_address: false,
            separator: " ".into(),
            invalid_marker: INVALID_MARKER.into(),
        }
    }
}

impl LabelConfig {
    /// Builder-style toggle for full-address display.
    pub fn full_address(mut self, show: bool) -> Self {
        self.show_full_address = show;
        self
    }

    /// Builder-style separator override.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// A rendered-ready label for one input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressLabel {
    /// The input validated; it carries a fingerprint.
    Verified {
        display: String,
        separator: String,
        fingerprint: Fingerprint,
    },
    /// The input did not validate; no fingerprint is derived for it.
    Unverified { raw: String, marker: String },
}

impl AddressLabel {
    /// Build the label for `address`, falling back to [`AddressLabel::Unverified`]
    /// when it is not a valid address.
    pub fn new(address: &str, config: &LabelConfig) -> Self {
        match Self::try_new(address, config) {
            Ok(label) => label,
            Err(e) => {
                tracing::debug!(len = address.len(), error = %e, "rendering unverified address");
                Self::Unverified {
                    raw: address.to_owned(),
                    marker: config.invalid_marker.clone(),
                }
            }
        }
    }

    /// Build the label for `address`, surfacing why it is invalid.
    pub fn try_new(address: &str, config: &LabelConfig) -> Result<Self> {
        let parsed = Address::parse(address)?;
        Ok(Self::Verified {
            display: format_address(address, config.show_full_address),
            separator: config.separator.clone(),
            fingerprint: parsed.fingerprint(),
        })
    }

    /// Whether the input validated.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }

    /// The fingerprint, for verified labels only.
    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        match self {
            Self::Verified { fingerprint, .. } => Some(fingerprint),
            Self::Unverified { .. } => None,
        }
    }
}

impl fmt::Display for AddressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verified {
                display,
                separator,
                fingerprint,
            } => write!(f, "{display}{separator}{fingerprint}"),
            Self::Unverified { raw, marker } => write!(f, "{raw} {marker}"),
        }
    }
}

/// Render the label for a single address.
pub fn render(address: &str, config: &LabelConfig) -> String {
    AddressLabel::new(address, config).to_string()
}

/// Render labels for many addresses, preserving order.
pub fn render_all<'a>(
    addresses: impl IntoIterator<Item = &'a str>,
    config: &LabelConfig,
) -> Vec<String> {
    addresses
        .into_iter()
        .map(|address| render(address, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphprintError;
    use glyphprint_core::{fingerprint, AddressError};

    const ADDR: &str = "0x1234567890123456789012345678901234567890";

    #[test]
    fn test_default_config() {
        let config = LabelConfig::default();
        assert!(!config.show_full_address);
        assert_eq!(config.separator, " ");
        assert_eq!(config.invalid_marker, "❌⚠️❓");
    }

    #[test]
    fn test_verified_label_truncates() {
        let rendered = render(ADDR, &LabelConfig::default());
        assert_eq!(rendered, format!("0x1234...7890 {}", fingerprint(ADDR)));
    }

    #[test]
    fn test_verified_label_full_address_and_separator() {
        let config = LabelConfig::default().full_address(true).separator("   ");
        let rendered = render(ADDR, &config);
        assert_eq!(rendered, format!("{}   {}", ADDR, fingerprint(ADDR)));
    }

    #[test]
    fn test_unprefixed_address_is_shown_whole() {
        let body = &ADDR[2..];
        let rendered = render(body, &LabelConfig::default());
        assert_eq!(rendered, format!("{} {}", body, fingerprint(ADDR)));
    }

    #[test]
    fn test_invalid_address_gets_marker() {
        let label = AddressLabel::new("0x123", &LabelConfig::default());
        assert!(!label.is_verified());
        assert!(label.fingerprint().is_none());
        assert_eq!(label.to_string(), "0x123 ❌⚠️❓");
    }

    #[test]
    fn test_try_new_surfaces_reason() {
        let err = AddressLabel::try_new("", &LabelConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            GlyphprintError::InvalidAddress(AddressError::Empty)
        ));
    }

    #[test]
    fn test_render_all_preserves_order() {
        let rendered = render_all([ADDR, "nope"], &LabelConfig::default());
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].starts_with("0x1234...7890 "));
        assert_eq!(rendered[1], format!("nope {}", INVALID_MARKER));
    }
}
