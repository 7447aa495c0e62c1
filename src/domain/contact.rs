//! ContactCard record.

use super::phone::PhoneNumber;
use super::sex::Sex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A phone book entry: a number plus a few facts about its owner.
///
/// The `Display` form lists every field so a card dropped into a log line
/// or an assertion message is readable as-is:
///
/// ```
/// use phone_display::domain::{ContactCard, PhoneNumber, Sex};
///
/// let card = ContactCard::new(PhoneNumber::new("4008123123").unwrap(), Sex::Male, 29);
/// assert_eq!(
///     card.to_string(),
///     "ContactCard@ number:4008123123  sex:male  intimacy:29"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    number: PhoneNumber,
    sex: Sex,
    intimacy: u32,
}

impl ContactCard {
    pub fn new(number: PhoneNumber, sex: Sex, intimacy: u32) -> Self {
        Self {
            number,
            sex,
            intimacy,
        }
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn intimacy(&self) -> u32 {
        self.intimacy
    }
}

impl fmt::Display for ContactCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContactCard@ number:{}  sex:{}  intimacy:{}",
            self.number.digits(),
            self.sex,
            self.intimacy
        )
    }
}
