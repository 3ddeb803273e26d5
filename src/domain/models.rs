use super::errors::{DomainError, DomainResult};
use super::services::{PhoneFormatter, PhoneValidator};

/// Number of digits in a valid phone number.
pub const PHONE_NUMBER_LEN: usize = 10;

/// Maximum length of the formatted input field (10 digits plus grouping
/// spaces, with a little headroom for over-typed digits).
pub const MAX_INPUT_LEN: usize = 13;

/// A phone number as entered by the user.
///
/// Wraps the raw input string and derives everything else from it: the
/// cleaned digit-only value, the grouped display form, and validity. The
/// validity flag is never stored, it is recomputed on demand from the
/// cleaned value.
///
/// # Examples
///
/// ```
/// use signin_tui::domain::PhoneNumber;
///
/// let number = PhoneNumber::from_input("0912 345 678");
/// assert_eq!(number.cleaned(), "0912345678");
/// assert_eq!(number.formatted(), "0912 345 678");
/// assert!(number.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    raw: String,
}

impl PhoneNumber {
    /// Wraps raw user input without cleaning or validating it.
    pub fn from_input(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The input exactly as entered, spaces and strays included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The input with all non-digit characters removed.
    pub fn cleaned(&self) -> String {
        PhoneFormatter::clean(&self.raw)
    }

    /// The cleaned value grouped 4-3-3 for display.
    pub fn formatted(&self) -> String {
        PhoneFormatter::group(&self.cleaned())
    }

    /// Whether the cleaned value is exactly 10 digits.
    pub fn is_valid(&self) -> bool {
        PhoneValidator::is_valid(&self.cleaned())
    }

    /// Validates the cleaned value, reporting the failure as a domain error.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPhoneFormat`] carrying the cleaned
    /// value when it is not exactly 10 digits.
    pub fn validate(&self) -> DomainResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(DomainError::InvalidPhoneFormat(self.cleaned()))
        }
    }
}
