//! Validation and formatting services for phone numbers.
//!
//! This module provides the two rule-bearing pieces of the sign-in flow:
//! a validator that accepts exactly 10 decimal digits, and a formatter
//! that renders a digit string as 4-3-3 groups for display.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile digits regex"));

static GROUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})(\d{3})(\d{3})").expect("Failed to compile grouping regex"));

/// Validates phone number input.
///
/// A phone number is valid when it consists solely of the characters
/// '0'-'9' and is exactly 10 digits long. There are no partial-validity
/// states and no locale-specific digit handling.
///
/// # Examples
///
/// ```
/// use signin_tui::domain::PhoneValidator;
///
/// assert!(PhoneValidator::is_valid("0912345678"));
/// assert!(!PhoneValidator::is_valid("12345"));
/// assert!(!PhoneValidator::is_valid("091234567a"));
/// assert!(!PhoneValidator::is_valid(""));
/// ```
pub struct PhoneValidator;

impl PhoneValidator {
    /// Returns true iff `number` is exactly 10 ASCII digits.
    ///
    /// # Arguments
    ///
    /// * `number` - Candidate string, expected to already be cleaned
    pub fn is_valid(number: &str) -> bool {
        DIGITS_ONLY.is_match(number) && number.len() == super::PHONE_NUMBER_LEN
    }
}

/// Formats phone numbers for display.
///
/// Formatting is presentation-only: validity is always computed from the
/// fully cleaned (digit-only) string, never from the grouped form.
///
/// # Examples
///
/// ```
/// use signin_tui::domain::PhoneFormatter;
///
/// assert_eq!(PhoneFormatter::clean("091 234-567a"), "091234567");
/// assert_eq!(PhoneFormatter::group("0912345678"), "0912 345 678");
/// assert_eq!(PhoneFormatter::group("09123"), "09123");
/// ```
pub struct PhoneFormatter;

impl PhoneFormatter {
    /// Removes every non-digit character from `input`.
    ///
    /// # Arguments
    ///
    /// * `input` - Raw user input, possibly containing spaces or strays
    ///
    /// # Returns
    ///
    /// The cleaned value: decimal digits only, possibly empty.
    pub fn clean(input: &str) -> String {
        input.chars().filter(char::is_ascii_digit).collect()
    }

    /// Groups a digit string as "NNNN NNN NNN" for display.
    ///
    /// Strips whitespace first, then inserts a single space after the 4th
    /// and 7th digit. The replacement applies once and is unanchored: with
    /// fewer than 10 digits nothing matches and the string passes through
    /// unchanged, with more than 10 the first 10 are grouped and the rest
    /// trail ungrouped.
    ///
    /// # Arguments
    ///
    /// * `digits` - Digit string, possibly containing whitespace from a
    ///   previously grouped display value
    pub fn group(digits: &str) -> String {
        let compact: String = digits.chars().filter(|c| !c.is_whitespace()).collect();
        GROUP_PATTERN.replace(&compact, "$1 $2 $3").into_owned()
    }
}
