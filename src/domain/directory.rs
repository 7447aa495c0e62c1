//! PhoneDirectory collection.

use super::contact::ContactCard;
use super::errors::ValidationError;
use super::phone::PhoneNumber;
use std::fmt;
use tracing::debug;

/// A named collection of contact cards.
///
/// A directory can hold far more entries than fit on a line, so its
/// `Display` is a summary: the name and the listing count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneDirectory {
    name: String,
    entries: Vec<ContactCard>,
}

impl PhoneDirectory {
    /// Create an empty directory.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            entries: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, card: ContactCard) {
        debug!(directory = %self.name, %card, "Adding listing");
        self.entries.push(card);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactCard> {
        self.entries.iter()
    }

    /// Find the first listing with the given number.
    pub fn find_by_number(&self, number: &PhoneNumber) -> Option<&ContactCard> {
        let found = self.entries.iter().find(|card| card.number() == number);
        debug!(%number, found = found.is_some(), "Directory lookup");
        found
    }
}

impl fmt::Display for PhoneDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} listings)", self.name, self.entries.len())
    }
}
