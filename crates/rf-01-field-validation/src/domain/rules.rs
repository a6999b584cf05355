//! Rule predicates.
//!
//! Each predicate answers "is this raw value acceptable?" and nothing else;
//! messages are attached by the schema.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::PaymentMethod;

/// Minimum trimmed length for name-like fields.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum trimmed length for free-text message fields.
pub const MIN_MESSAGE_LEN: usize = 10;

lazy_static! {
    /// `local@domain.tld`, no whitespace, single `@` before the dot
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").expect("Failed to compile EMAIL_PATTERN");

    /// 8-20 characters of digits, `+`, spaces, hyphens, parentheses
    static ref PHONE_PATTERN: Regex =
        Regex::new(r"^[+0-9\s\-()]{8,20}$").expect("Failed to compile PHONE_PATTERN");
}

/// Trimmed length in characters.
fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Name-like fields need at least two non-blank characters.
pub fn is_valid_name(value: &str) -> bool {
    trimmed_len(value) >= MIN_NAME_LEN
}

/// Minimal structural email check (`x@y.z`), not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Phone numbers are optional; a present value is checked after all
/// whitespace is removed.
pub fn is_valid_optional_phone(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_PATTERN.is_match(&compact)
}

/// A selection counts as made when it is non-empty.
pub fn is_selected(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Free-text messages need at least ten non-blank characters.
pub fn is_valid_message(value: &str) -> bool {
    trimmed_len(value) >= MIN_MESSAGE_LEN
}

/// Required fields must be non-empty after trimming.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Blank selects the default method; anything else must be a known id.
pub fn is_known_payment_method(value: &str) -> bool {
    value.trim().is_empty() || value.parse::<PaymentMethod>().is_ok()
}
