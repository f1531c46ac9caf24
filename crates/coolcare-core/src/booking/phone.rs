//! Contact number validation.

use once_cell::sync::Lazy;
use regex::Regex;

// `[0-9]` rather than `\d`: the regex crate's `\d` matches every Unicode digit.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid regex"));

/// Returns true iff `candidate` is exactly 10 ASCII digits.
///
/// No normalization is applied: country codes, spaces and dashes all make the
/// number invalid.
///
/// # Examples
///
/// ```
/// use coolcare_core::booking::is_valid_phone;
///
/// assert!(is_valid_phone("9876543210"));
/// assert!(!is_valid_phone("+919876543210"));
/// ```
pub fn is_valid_phone(candidate: &str) -> bool {
    PHONE_PATTERN.is_match(candidate)
}
