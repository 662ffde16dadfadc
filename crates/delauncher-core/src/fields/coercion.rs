//! Typed reads of section properties with fallbacks.
//!
//! Every read consults only the first occurrence of a key. None of these
//! functions fail: absent or unusable values yield the supplied default.

use delauncher_ini::Section;

/// The only spelling [`get_boolean`] treats as true.
const TRUE_LITERAL: &str = "true";

/// Raw value of `key`, or `default` when absent.
pub fn get_string(section: &Section, key: &str, default: &str) -> String {
    section.find(key, 0).unwrap_or(default).to_string()
}

/// Numeric-prefix value of `key`, or `default` when absent or without digits.
///
/// `"42abc"` reads as 42; `"abc"` falls back to `default`.
pub fn get_integer(section: &Section, key: &str, default: i64) -> i64 {
    section
        .find(key, 0)
        .and_then(parse_integer_prefix)
        .unwrap_or(default)
}

/// `true` only for the exact value `"true"`; `default` when absent.
///
/// `"True"`, `"1"` and `"yes"` are all false.
pub fn get_boolean(section: &Section, key: &str, default: bool) -> bool {
    section
        .find(key, 0)
        .map_or(default, |raw| raw == TRUE_LITERAL)
}

/// Parse the leading base-10 integer of `raw`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Out-of-range values saturate. Returns `None` when no
/// digit is found.
pub fn parse_integer_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }

    seen_digit.then_some(value)
}
