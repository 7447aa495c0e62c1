//! Phone number formatting.

use crate::domain::{PhoneNumber, ValidationError};

/// Format a ten-digit numeral string as `AAA-PPP-LLLL`.
///
/// Each part is zero-padded to its fixed width, so the result is always
/// 12 characters long.
///
/// # Errors
///
/// Returns `ValidationError::InvalidFormat` when the input is not exactly
/// ten ASCII digits.
///
/// # Example
///
/// ```
/// use phone_display::format_phone_number;
///
/// assert_eq!(format_phone_number("4008123123").unwrap(), "400-812-3123");
/// assert!(format_phone_number("400812312a").is_err());
/// ```
pub fn format_phone_number(input: &str) -> Result<String, ValidationError> {
    PhoneNumber::new(input).map(|phone| phone.to_string())
}
