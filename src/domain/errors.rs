//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input is not a ten-digit numeral string (or its `AAA-PPP-LLLL` form).
    InvalidFormat(String),

    /// The provided sex is not one of the known variants.
    InvalidSex(String),

    /// The provided name is empty or whitespace only.
    EmptyName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(input) => write!(f, "Invalid phone number format: {:?}", input),
            Self::InvalidSex(sex) => write!(f, "Invalid sex: {}", sex),
            Self::EmptyName => write!(f, "Name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
