//! Domain value objects and types.
//!
//! Each type here carries an informative `Display` implementation: the
//! phone number renders as `AAA-PPP-LLLL`, a contact card prints every
//! field, and a directory prints a one-line summary instead of its entries.

pub mod contact;
pub mod directory;
pub mod errors;
pub mod phone;
pub mod sex;

pub use contact::ContactCard;
pub use directory::PhoneDirectory;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use sex::Sex;
