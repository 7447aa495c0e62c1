//! phone-display - informative string representations for small record types.
//!
//! The library formats ten-digit phone numbers as `AAA-PPP-LLLL` and gives
//! its record types `Display` implementations that show their contents
//! rather than an opaque identity.
//!
//! # Architecture
//!
//! - **domain**: PhoneNumber, Sex, ContactCard and PhoneDirectory value types
//! - **format**: the `format_phone_number` entry point
//! - **error**: configuration error types
//! - **config**: demo settings from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod format;

pub use config::Config;
pub use domain::{ContactCard, PhoneDirectory, PhoneNumber, Sex, ValidationError};
pub use error::{ConfigError, ConfigResult};
pub use format::format_phone_number;
