//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a raw phone number.
pub const RAW_LEN: usize = 10;

/// Length of the `AAA-PPP-LLLL` display form.
pub const DISPLAY_LEN: usize = 12;

/// A ten-digit phone number split into area code, prefix and line number.
///
/// Validation happens at construction, so a `PhoneNumber` always holds
/// three in-range parts. The `Display` form is the fixed-width
/// `AAA-PPP-LLLL`; every part is zero-padded, so `"0010020003"` displays as
/// `001-002-0003`.
///
/// # Example
///
/// ```
/// use phone_display::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("4008123123").unwrap();
/// assert_eq!(phone.area_code(), 400);
/// assert_eq!(phone.to_string(), "400-812-3123");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    area_code: u16,
    prefix: u16,
    line_number: u16,
}

impl PhoneNumber {
    /// Create a new PhoneNumber from a ten-digit numeral string.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 10 characters long
    /// - Every character must be an ASCII digit (no signs, no whitespace)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if either rule is broken.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let invalid = || ValidationError::InvalidFormat(raw.to_string());

        // Checked before slicing so a multi-byte char never straddles a cut.
        if raw.len() != RAW_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let area_code = parse_part(&raw[0..3]).ok_or_else(invalid)?;
        let prefix = parse_part(&raw[3..6]).ok_or_else(invalid)?;
        let line_number = parse_part(&raw[6..10]).ok_or_else(invalid)?;

        Ok(Self {
            area_code,
            prefix,
            line_number,
        })
    }

    /// The first three digits.
    pub fn area_code(&self) -> u16 {
        self.area_code
    }

    /// The middle three digits.
    pub fn prefix(&self) -> u16 {
        self.prefix
    }

    /// The last four digits.
    pub fn line_number(&self) -> u16 {
        self.line_number
    }

    /// The raw ten-digit form, without separators.
    pub fn digits(&self) -> String {
        format!(
            "{:03}{:03}{:04}",
            self.area_code, self.prefix, self.line_number
        )
    }
}

/// Parse a slice already known to hold one to four ASCII digits.
fn parse_part(part: &str) -> Option<u16> {
    part.parse().ok()
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    /// Accepts either the raw ten digits or the `AAA-PPP-LLLL` display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == DISPLAY_LEN {
            let bytes = s.as_bytes();
            if bytes[3] == b'-' && bytes[7] == b'-' {
                // Both separators are ASCII, so these slice boundaries are valid.
                let raw = [&s[0..3], &s[4..7], &s[8..12]].concat();
                return Self::new(raw).map_err(|_| ValidationError::InvalidFormat(s.to_string()));
            }
            return Err(ValidationError::InvalidFormat(s.to_string()));
        }
        Self::new(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// Serde support - serialize as the display form
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from either form with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}-{:03}-{:04}",
            self.area_code, self.prefix, self.line_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("4008123123").unwrap();
        assert_eq!(phone.area_code(), 400);
        assert_eq!(phone.prefix(), 812);
        assert_eq!(phone.line_number(), 3123);
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("400812312").is_err());
        assert!(PhoneNumber::new("40081231234").is_err());
        assert!(PhoneNumber::new("400812312a").is_err());
        assert!(PhoneNumber::new("+400812312").is_err());
        assert!(PhoneNumber::new("400+812312").is_err());
        assert!(PhoneNumber::new("400 812312").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
        assert!(PhoneNumber::new("9999999999").is_ok());
    }

    #[test]
    fn test_phone_rejects_multibyte() {
        // Ten bytes but not ten digits
        assert!(PhoneNumber::new("40081231é").is_err());
        // Ten bytes with a char straddling the area code cut
        assert!(PhoneNumber::new("40é8123123").is_err());
        // Full-width digits are not ASCII digits
        assert!(PhoneNumber::new("４００８１２３１２３").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        let err = PhoneNumber::new("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidFormat("12345".to_string()));
    }

    #[test]
    fn test_phone_display_zero_padded() {
        let phone = PhoneNumber::new("0010020003").unwrap();
        assert_eq!(format!("{}", phone), "001-002-0003");
        assert_eq!(phone.digits(), "0010020003");
    }

    #[test]
    fn test_phone_from_str_both_forms() {
        let raw: PhoneNumber = "4008123123".parse().unwrap();
        let display: PhoneNumber = "400-812-3123".parse().unwrap();
        assert_eq!(raw, display);
    }

    #[test]
    fn test_phone_from_str_rejects_bad_display() {
        assert!("400.812.3123".parse::<PhoneNumber>().is_err());
        assert!("400-8123-123".parse::<PhoneNumber>().is_err());
        assert!("40-0812-3123".parse::<PhoneNumber>().is_err());
        assert!("400-81a-3123".parse::<PhoneNumber>().is_err());

        let err = "400-81a-3123".parse::<PhoneNumber>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat("400-81a-3123".to_string())
        );
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("4008123123").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"400-812-3123\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"400-812-3123\"").unwrap();
        assert_eq!(phone.digits(), "4008123123");

        let phone: PhoneNumber = serde_json::from_str("\"4008123123\"").unwrap();
        assert_eq!(phone.line_number(), 3123);
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
