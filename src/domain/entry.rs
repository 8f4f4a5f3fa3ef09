//! Journal entry model
//!
//! An entry is a dated record attached to a profile. Its payload is one of
//! five shapes, modelled as [`EntryKind`] so that every consumer has to
//! handle each shape explicitly.

use crate::domain::profile::ProfileId;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminant of [`EntryKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum EntryType {
    #[default]
    Favorite,
    Measurement,
    Memory,
    Journal,
    Milestone,
}

impl EntryType {
    /// All entry types in display order
    pub const ALL: [EntryType; 5] = [
        EntryType::Favorite,
        EntryType::Measurement,
        EntryType::Memory,
        EntryType::Journal,
        EntryType::Milestone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Favorite => "Favorite",
            EntryType::Measurement => "Measurement",
            EntryType::Memory => "Memory",
            EntryType::Journal => "Journal",
            EntryType::Milestone => "Milestone",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "favorite" => Ok(EntryType::Favorite),
            "measurement" => Ok(EntryType::Measurement),
            "memory" => Ok(EntryType::Memory),
            "journal" => Ok(EntryType::Journal),
            "milestone" => Ok(EntryType::Milestone),
            _ => Err(format!(
                "Invalid entry type: '{}'. Valid types are: Favorite, Measurement, Memory, Journal, Milestone",
                s
            )),
        }
    }
}

/// Variant-specific payload of an entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Favorite {
        category: String,
        answer: String,
    },
    Measurement {
        measurement: String,
        value: f64,
        unit: String,
    },
    Memory {
        title: String,
        description: String,
        mood: Option<String>,
    },
    Journal {
        title: String,
        content: String,
    },
    Milestone {
        title: String,
        description: String,
        category: String,
    },
}

impl EntryKind {
    pub fn entry_type(&self) -> EntryType {
        match self {
            EntryKind::Favorite { .. } => EntryType::Favorite,
            EntryKind::Measurement { .. } => EntryType::Measurement,
            EntryKind::Memory { .. } => EntryType::Memory,
            EntryKind::Journal { .. } => EntryType::Journal,
            EntryKind::Milestone { .. } => EntryType::Milestone,
        }
    }

    /// Short heading shown on timeline cards
    pub fn headline(&self) -> String {
        match self {
            EntryKind::Favorite { category, .. } => category.clone(),
            EntryKind::Measurement { measurement, .. } => measurement.clone(),
            EntryKind::Memory { title, .. } | EntryKind::Journal { title, .. } => title.clone(),
            EntryKind::Milestone {
                title, category, ..
            } => {
                if category.trim().is_empty() {
                    title.clone()
                } else {
                    category.clone()
                }
            }
        }
    }

    /// Body text shown under the headline
    pub fn body(&self) -> String {
        match self {
            EntryKind::Favorite { answer, .. } => answer.clone(),
            EntryKind::Measurement { value, unit, .. } => format!("{} {}", value, unit),
            EntryKind::Memory { description, .. } | EntryKind::Milestone { description, .. } => {
                description.clone()
            }
            EntryKind::Journal { content, .. } => content.clone(),
        }
    }
}

/// Entry payload before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub profile_id: ProfileId,
    pub kind: EntryKind,
}

impl NewEntry {
    pub fn new(date: NaiveDate, profile_id: ProfileId, kind: EntryKind) -> Self {
        NewEntry {
            date,
            profile_id,
            kind,
        }
    }
}

/// A stored journal entry
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub profile_id: ProfileId,
    pub kind: EntryKind,
}

impl Entry {
    /// Attach an id to a new entry
    pub fn from_new(id: EntryId, new_entry: NewEntry) -> Self {
        Entry {
            id,
            date: new_entry.date,
            profile_id: new_entry.profile_id,
            kind: new_entry.kind,
        }
    }

    pub fn entry_type(&self) -> EntryType {
        self.kind.entry_type()
    }
}
