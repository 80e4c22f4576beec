//! Static country reference list used by the dial code selector.
//!
//! Dial codes are stored as bare digit strings (`"62"`, not `"+62"`) so they
//! can be concatenated directly in front of sanitized digits. The list is
//! read-only; there is no detection, the user picks an entry.

use crate::error::{Result, WalinkError};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Dial code selected when nothing has been persisted yet (Indonesia).
pub const DEFAULT_DIAL_CODE: &str = "62";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    pub code: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
    pub flag: &'static str,
}

const fn country(
    code: &'static str,
    name: &'static str,
    dial_code: &'static str,
    flag: &'static str,
) -> Country {
    Country {
        code,
        name,
        dial_code,
        flag,
    }
}

pub static COUNTRIES: &[Country] = &[
    country("ID", "Indonesia", "62", "🇮🇩"),
    country("MY", "Malaysia", "60", "🇲🇾"),
    country("SG", "Singapore", "65", "🇸🇬"),
    country("TH", "Thailand", "66", "🇹🇭"),
    country("PH", "Philippines", "63", "🇵🇭"),
    country("VN", "Vietnam", "84", "🇻🇳"),
    country("IN", "India", "91", "🇮🇳"),
    country("PK", "Pakistan", "92", "🇵🇰"),
    country("BD", "Bangladesh", "880", "🇧🇩"),
    country("CN", "China", "86", "🇨🇳"),
    country("JP", "Japan", "81", "🇯🇵"),
    country("KR", "South Korea", "82", "🇰🇷"),
    country("AU", "Australia", "61", "🇦🇺"),
    country("NZ", "New Zealand", "64", "🇳🇿"),
    country("US", "United States", "1", "🇺🇸"),
    country("CA", "Canada", "1", "🇨🇦"),
    country("MX", "Mexico", "52", "🇲🇽"),
    country("BR", "Brazil", "55", "🇧🇷"),
    country("AR", "Argentina", "54", "🇦🇷"),
    country("CO", "Colombia", "57", "🇨🇴"),
    country("GB", "United Kingdom", "44", "🇬🇧"),
    country("DE", "Germany", "49", "🇩🇪"),
    country("FR", "France", "33", "🇫🇷"),
    country("ES", "Spain", "34", "🇪🇸"),
    country("IT", "Italy", "39", "🇮🇹"),
    country("NL", "Netherlands", "31", "🇳🇱"),
    country("PT", "Portugal", "351", "🇵🇹"),
    country("RU", "Russia", "7", "🇷🇺"),
    country("TR", "Turkey", "90", "🇹🇷"),
    country("SA", "Saudi Arabia", "966", "🇸🇦"),
    country("AE", "United Arab Emirates", "971", "🇦🇪"),
    country("EG", "Egypt", "20", "🇪🇬"),
    country("NG", "Nigeria", "234", "🇳🇬"),
    country("KE", "Kenya", "254", "🇰🇪"),
    country("ZA", "South Africa", "27", "🇿🇦"),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Country>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.code, c)).collect());

/// First entry with this dial code. Shared codes (`1` for US and Canada)
/// resolve to whichever comes first in the list.
pub fn find_by_dial_code(dial_code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.dial_code == dial_code)
}

/// Case-insensitive ISO code lookup.
pub fn find_by_code(code: &str) -> Option<&'static Country> {
    BY_CODE.get(code.to_ascii_uppercase().as_str()).copied()
}

/// Resolves user input that is either an ISO code (`id`, `GB`) or a dial
/// code (`62`, `+44`).
pub fn resolve(selector: &str) -> Result<&'static Country> {
    let trimmed = selector.trim();
    let as_dial = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let found = if !as_dial.is_empty() && as_dial.chars().all(|c| c.is_ascii_digit()) {
        find_by_dial_code(as_dial)
    } else {
        find_by_code(trimmed)
    };

    found.ok_or_else(|| WalinkError::UnknownCountry(selector.to_string()))
}

/// Entries whose name or code contains `term`, or whose dial code starts with
/// it. An empty term returns the whole list in order.
pub fn search(term: &str) -> Vec<&'static Country> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return COUNTRIES.iter().collect();
    }
    let dial_needle = needle.strip_prefix('+').unwrap_or(&needle);

    COUNTRIES
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.code.to_lowercase() == needle
                || c.dial_code.starts_with(dial_needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_dial_code_is_listed() {
        let c = find_by_dial_code(DEFAULT_DIAL_CODE).unwrap();
        assert_eq!(c.code, "ID");
    }

    #[test]
    fn dial_codes_are_bare_digits() {
        for c in COUNTRIES {
            assert!(!c.dial_code.is_empty(), "{}", c.code);
            assert!(c.dial_code.chars().all(|ch| ch.is_ascii_digit()), "{}", c.code);
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = COUNTRIES.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn resolve_accepts_iso_and_dial_codes() {
        assert_eq!(resolve("gb").unwrap().dial_code, "44");
        assert_eq!(resolve("44").unwrap().code, "GB");
        assert_eq!(resolve("+44").unwrap().code, "GB");
        assert_eq!(resolve(" ID ").unwrap().dial_code, "62");
    }

    #[test]
    fn shared_dial_code_resolves_to_first_entry() {
        assert_eq!(resolve("1").unwrap().code, "US");
        assert_eq!(resolve("CA").unwrap().dial_code, "1");
    }

    #[test]
    fn resolve_rejects_unknown() {
        assert!(matches!(resolve("XX"), Err(WalinkError::UnknownCountry(_))));
        assert!(matches!(resolve("999"), Err(WalinkError::UnknownCountry(_))));
        assert!(matches!(resolve("+"), Err(WalinkError::UnknownCountry(_))));
    }

    #[test]
    fn search_matches_name_code_and_dial_prefix() {
        let names: Vec<_> = search("united").iter().map(|c| c.code).collect();
        assert_eq!(names, vec!["US", "GB", "AE"]);

        let by_code: Vec<_> = search("de").iter().map(|c| c.code).collect();
        assert!(by_code.contains(&"DE"));
        assert!(by_code.contains(&"BD")); // "Bangladesh"

        let by_dial: Vec<_> = search("+97").iter().map(|c| c.code).collect();
        assert_eq!(by_dial, vec!["AE"]);
    }

    #[test]
    fn empty_search_lists_everything() {
        assert_eq!(search("  ").len(), COUNTRIES.len());
    }
}
