#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidPhoneFormat(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidPhoneFormat(digits) => {
                write!(
                    f,
                    "Invalid phone number: expected exactly 10 digits, got {}",
                    digits.len()
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
