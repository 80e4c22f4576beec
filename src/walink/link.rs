//! Click-to-chat link construction.
//!
//! Links follow WhatsApp's `wa.me` scheme:
//!
//! ```text
//! https://wa.me/<dial code><digits>[?text=<percent-encoded message>]
//! ```
//!
//! The number part must be digits only, with no `+` and no separators, so
//! callers pass values that already went through [`crate::phone::sanitize`].

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const WA_ME_BASE: &str = "https://wa.me/";

/// URI component encoding: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builds the link for `dial_code` + `digits`, with an optional prefilled message.
///
/// Returns an empty string when `digits` is empty, whatever the dial code or
/// message. A non-empty result is not necessarily actionable: gate on
/// [`crate::phone::is_valid`] before opening, copying or sharing it.
pub fn build_link(dial_code: &str, digits: &str, message: Option<&str>) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let mut url = format!("{}{}{}", WA_ME_BASE, dial_code, digits);
    if let Some(text) = message.filter(|m| !m.is_empty()) {
        url.push_str("?text=");
        url.push_str(&encode_component(text));
    }
    url
}

/// The link without its scheme, for compact display.
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://").unwrap_or(url)
}
