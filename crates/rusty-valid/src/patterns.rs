// File: src/patterns.rs
// Purpose: Process-wide matchers used by the text rules

use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII letters and space
static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z ]*$").unwrap());

// ASCII letters, digits and space
static ALPHA_NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]*$").unwrap());

// ASCII digits
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").unwrap());

pub fn is_alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

pub fn is_alpha_numeric(value: &str) -> bool {
    ALPHA_NUMERIC_REGEX.is_match(value)
}

pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

// RFC 5322 specials that must be quoted inside a display name
const SPECIALS: &[char] = &['(', ')', '<', '>', '[', ']', ':', ';', '@', '\\', ',', '"'];

/// Validate a single mail address.
///
/// Accepts a bare addr-spec (`ada@example.com`, `"a b"@example.com`) or the
/// name-addr form (`Ada <ada@example.com>`, `<ada@example.com>`), with
/// surrounding whitespace ignored. The addr-spec itself is checked by
/// `email_address`.
pub fn is_valid_email(value: &str) -> bool {
    match addr_spec(value) {
        Some(addr) => EmailAddress::is_valid(addr),
        None => false,
    }
}

/// Strip an optional `display-name <...>` wrapper.
fn addr_spec(value: &str) -> Option<&str> {
    let value = value.trim();
    let Some(rest) = value.strip_suffix('>') else {
        return Some(value);
    };
    let (display, addr) = rest.rsplit_once('<')?;
    is_display_name(display.trim()).then(|| addr.trim())
}

fn is_display_name(display: &str) -> bool {
    if display.len() >= 2 && display.starts_with('"') && display.ends_with('"') {
        let inner = &display[1..display.len() - 1];
        return !inner.replace("\\\"", "").contains('"');
    }
    !display.contains(SPECIALS)
}

/// True when any character of `value` appears in `set`.
pub fn contains_any(value: &str, set: &str) -> bool {
    value.chars().any(|c| set.contains(c))
}

/// True when every character of `value` appears in `set`.
pub fn only_from(value: &str, set: &str) -> bool {
    value.chars().all(|c| set.contains(c))
}
