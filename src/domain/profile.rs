//! Child profile model

use chrono::{Datelike, NaiveDate};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        ProfileId(Uuid::new_v4())
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked child: name plus birthday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub birthday: NaiveDate,
}

impl Profile {
    /// Create a profile with a freshly generated id
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> Self {
        Profile {
            id: ProfileId::generate(),
            name: name.into(),
            birthday,
        }
    }

    /// Age in completed years on the given date.
    ///
    /// A year only counts once the birthday anniversary has been reached;
    /// dates before the birthday yield 0.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        if date <= self.birthday {
            return 0;
        }

        let mut age = date.year() - self.birthday.year();
        if (date.month(), date.day()) < (self.birthday.month(), self.birthday.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }
}
