//! Entry draft: the state behind the "new entry" form.
//!
//! The draft holds text for every entry type at once so switching types
//! does not lose what was typed. It only becomes an [`EntryKind`] when it is
//! turned into a [`NewEntry`], and only the fields of the selected type are
//! read at that point.

use crate::domain::catalog;
use crate::domain::entry::{EntryKind, EntryType, NewEntry};
use crate::domain::profile::ProfileId;
use crate::error::{MemoriesError, Result};
use chrono::NaiveDate;

/// Text fields of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FavoriteCategory,
    FavoriteAnswer,
    MeasurementType,
    MeasurementValue,
    MeasurementUnit,
    MemoryTitle,
    MemoryDescription,
    MemoryMood,
    JournalTitle,
    JournalContent,
    MilestoneTitle,
    MilestoneDescription,
    MilestoneCategory,
}

impl DraftField {
    /// Suggested values for fields picked from a list
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            DraftField::FavoriteCategory => &catalog::FAVORITE_CATEGORIES[..],
            DraftField::MeasurementType => &catalog::MEASUREMENT_TYPES[..],
            DraftField::MilestoneCategory => &catalog::MILESTONE_CATEGORIES[..],
            _ => &[],
        }
    }

    /// True for list-backed fields holding one of the suggestions
    pub fn is_suggested(&self, value: &str) -> bool {
        catalog::contains(self.suggestions(), value)
    }
}

/// Reducer actions applied to a draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SetField(DraftField, String),
    SetType(EntryType),
    SetDate(NaiveDate),
    SelectProfile(ProfileId),
    ClearProfile,
    Reset,
}

/// Where a draft sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStatus {
    Empty,
    Partial,
    Valid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub profile: Option<ProfileId>,
    pub entry_type: EntryType,
    pub date: NaiveDate,
    pub favorite_category: String,
    pub favorite_answer: String,
    pub measurement_type: String,
    pub measurement_value: String,
    pub measurement_unit: String,
    pub memory_title: String,
    pub memory_description: String,
    pub memory_mood: String,
    pub journal_title: String,
    pub journal_content: String,
    pub milestone_title: String,
    pub milestone_description: String,
    pub milestone_category: String,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl EntryDraft {
    /// Empty Favorite draft dated `date` with no profile selected
    pub fn new(date: NaiveDate) -> Self {
        EntryDraft {
            profile: None,
            entry_type: EntryType::default(),
            date,
            favorite_category: String::new(),
            favorite_answer: String::new(),
            measurement_type: String::new(),
            measurement_value: String::new(),
            measurement_unit: String::new(),
            memory_title: String::new(),
            memory_description: String::new(),
            memory_mood: String::new(),
            journal_title: String::new(),
            journal_content: String::new(),
            milestone_title: String::new(),
            milestone_description: String::new(),
            milestone_category: String::new(),
        }
    }

    /// Apply one reducer action
    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::SetField(field, value) => *self.field_mut(field) = value,
            DraftAction::SetType(entry_type) => self.entry_type = entry_type,
            DraftAction::SetDate(date) => self.date = date,
            DraftAction::SelectProfile(id) => self.profile = Some(id),
            DraftAction::ClearProfile => self.profile = None,
            DraftAction::Reset => self.reset(),
        }
    }

    /// Builder-style [`apply`](Self::apply)
    pub fn with(mut self, action: DraftAction) -> Self {
        self.apply(action);
        self
    }

    /// Back to an empty draft. The date is kept.
    pub fn reset(&mut self) {
        *self = EntryDraft::new(self.date);
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::FavoriteCategory => &self.favorite_category,
            DraftField::FavoriteAnswer => &self.favorite_answer,
            DraftField::MeasurementType => &self.measurement_type,
            DraftField::MeasurementValue => &self.measurement_value,
            DraftField::MeasurementUnit => &self.measurement_unit,
            DraftField::MemoryTitle => &self.memory_title,
            DraftField::MemoryDescription => &self.memory_description,
            DraftField::MemoryMood => &self.memory_mood,
            DraftField::JournalTitle => &self.journal_title,
            DraftField::JournalContent => &self.journal_content,
            DraftField::MilestoneTitle => &self.milestone_title,
            DraftField::MilestoneDescription => &self.milestone_description,
            DraftField::MilestoneCategory => &self.milestone_category,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::FavoriteCategory => &mut self.favorite_category,
            DraftField::FavoriteAnswer => &mut self.favorite_answer,
            DraftField::MeasurementType => &mut self.measurement_type,
            DraftField::MeasurementValue => &mut self.measurement_value,
            DraftField::MeasurementUnit => &mut self.measurement_unit,
            DraftField::MemoryTitle => &mut self.memory_title,
            DraftField::MemoryDescription => &mut self.memory_description,
            DraftField::MemoryMood => &mut self.memory_mood,
            DraftField::JournalTitle => &mut self.journal_title,
            DraftField::JournalContent => &mut self.journal_content,
            DraftField::MilestoneTitle => &mut self.milestone_title,
            DraftField::MilestoneDescription => &mut self.milestone_description,
            DraftField::MilestoneCategory => &mut self.milestone_category,
        }
    }

    /// Required fields of the selected type are filled in
    pub fn has_required_fields(&self) -> bool {
        match self.entry_type {
            EntryType::Favorite => {
                filled(&self.favorite_category) && filled(&self.favorite_answer)
            }
            EntryType::Measurement => {
                filled(&self.measurement_type)
                    && filled(&self.measurement_value)
                    && filled(&self.measurement_unit)
            }
            EntryType::Memory => filled(&self.memory_title) && filled(&self.memory_description),
            EntryType::Journal => filled(&self.journal_title) && filled(&self.journal_content),
            EntryType::Milestone => {
                filled(&self.milestone_title) && filled(&self.milestone_description)
            }
        }
    }

    /// Submittable: a profile is selected and required fields are filled
    pub fn is_valid(&self) -> bool {
        self.profile.is_some() && self.has_required_fields()
    }

    pub fn status(&self) -> DraftStatus {
        if self.is_valid() {
            return DraftStatus::Valid;
        }

        let any_text = [
            &self.favorite_category,
            &self.favorite_answer,
            &self.measurement_type,
            &self.measurement_value,
            &self.measurement_unit,
            &self.memory_title,
            &self.memory_description,
            &self.memory_mood,
            &self.journal_title,
            &self.journal_content,
            &self.milestone_title,
            &self.milestone_description,
            &self.milestone_category,
        ]
        .iter()
        .any(|value| filled(value));

        if any_text || self.profile.is_some() {
            DraftStatus::Partial
        } else {
            DraftStatus::Empty
        }
    }

    /// Names of the required fields still missing, for error messages
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.profile.is_none() {
            missing.push("profile");
        }

        let required: Vec<(&'static str, &str)> = match self.entry_type {
            EntryType::Favorite => vec![
                ("category", self.favorite_category.as_str()),
                ("answer", self.favorite_answer.as_str()),
            ],
            EntryType::Measurement => vec![
                ("measurement", self.measurement_type.as_str()),
                ("value", self.measurement_value.as_str()),
                ("unit", self.measurement_unit.as_str()),
            ],
            EntryType::Memory => vec![
                ("title", self.memory_title.as_str()),
                ("description", self.memory_description.as_str()),
            ],
            EntryType::Journal => vec![
                ("title", self.journal_title.as_str()),
                ("content", self.journal_content.as_str()),
            ],
            EntryType::Milestone => vec![
                ("title", self.milestone_title.as_str()),
                ("description", self.milestone_description.as_str()),
            ],
        };

        missing.extend(
            required
                .into_iter()
                .filter(|(_, value)| !filled(value))
                .map(|(name, _)| name),
        );
        missing
    }

    /// Convert into an entry payload ready for the store
    pub fn to_new_entry(&self) -> Result<NewEntry> {
        let profile_id = match self.profile {
            Some(id) if self.has_required_fields() => id,
            _ => {
                return Err(MemoriesError::Validation(format!(
                    "{} entry is missing: {}",
                    self.entry_type,
                    self.missing_fields().join(", ")
                )))
            }
        };

        let kind = match self.entry_type {
            EntryType::Favorite => EntryKind::Favorite {
                category: self.favorite_category.trim().to_string(),
                answer: self.favorite_answer.trim().to_string(),
            },
            EntryType::Measurement => {
                let raw = self.measurement_value.trim();
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        MemoriesError::Validation(format!(
                            "Measurement value must be a number, got '{}'",
                            raw
                        ))
                    })?;
                EntryKind::Measurement {
                    measurement: self.measurement_type.trim().to_string(),
                    value,
                    unit: self.measurement_unit.trim().to_string(),
                }
            }
            EntryType::Memory => EntryKind::Memory {
                title: self.memory_title.trim().to_string(),
                description: self.memory_description.trim().to_string(),
                mood: Some(self.memory_mood.trim())
                    .filter(|mood| !mood.is_empty())
                    .map(str::to_string),
            },
            EntryType::Journal => EntryKind::Journal {
                title: self.journal_title.trim().to_string(),
                content: self.journal_content.trim().to_string(),
            },
            EntryType::Milestone => EntryKind::Milestone {
                title: self.milestone_title.trim().to_string(),
                description: self.milestone_description.trim().to_string(),
                category: self.milestone_category.trim().to_string(),
            },
        };

        Ok(NewEntry::new(self.date, profile_id, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn measurement_draft(kind: &str, value: &str, unit: &str) -> EntryDraft {
        EntryDraft::new(today())
            .with(DraftAction::SelectProfile(ProfileId::generate()))
            .with(DraftAction::SetType(EntryType::Measurement))
            .with(DraftAction::SetField(DraftField::MeasurementType, kind.into()))
            .with(DraftAction::SetField(DraftField::MeasurementValue, value.into()))
            .with(DraftAction::SetField(DraftField::MeasurementUnit, unit.into()))
    }

    #[test]
    fn test_field_suggestions() {
        assert_eq!(DraftField::FavoriteCategory.suggestions().len(), 8);
        assert!(DraftField::MeasurementType.is_suggested("weight"));
        assert!(!DraftField::MilestoneCategory.is_suggested("First Bike Ride"));
        assert!(DraftField::JournalTitle.suggestions().is_empty());
        assert!(!DraftField::JournalTitle.is_suggested("anything"));
    }

    #[test]
    fn test_new_draft_is_empty_favorite() {
        let draft = EntryDraft::new(today());
        assert_eq!(draft.entry_type, EntryType::Favorite);
        assert_eq!(draft.status(), DraftStatus::Empty);
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_measurement_without_unit_is_invalid() {
        let draft = measurement_draft("Height", "120", "");
        assert!(!draft.is_valid());
        assert_eq!(draft.status(), DraftStatus::Partial);
        assert_eq!(draft.missing_fields(), vec!["unit"]);
    }

    #[test]
    fn test_measurement_with_all_fields_is_valid() {
        let draft = measurement_draft("Height", "120", "cm");
        assert!(draft.is_valid());
        assert_eq!(draft.status(), DraftStatus::Valid);
    }

    #[test]
    fn test_blank_text_does_not_count() {
        let draft = EntryDraft::new(today())
            .with(DraftAction::SelectProfile(ProfileId::generate()))
            .with(DraftAction::SetField(DraftField::FavoriteCategory, "Color".into()))
            .with(DraftAction::SetField(DraftField::FavoriteAnswer, "   ".into()));
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_profile_is_required() {
        let draft = EntryDraft::new(today())
            .with(DraftAction::SetType(EntryType::Journal))
            .with(DraftAction::SetField(DraftField::JournalTitle, "Halloween".into()))
            .with(DraftAction::SetField(DraftField::JournalContent, "Trick or treat".into()));
        assert!(draft.has_required_fields());
        assert!(!draft.is_valid());
        assert_eq!(draft.missing_fields(), vec!["profile"]);
    }

    #[test]
    fn test_milestone_category_is_optional() {
        let draft = EntryDraft::new(today())
            .with(DraftAction::SelectProfile(ProfileId::generate()))
            .with(DraftAction::SetType(EntryType::Milestone))
            .with(DraftAction::SetField(DraftField::MilestoneTitle, "Walking".into()))
            .with(DraftAction::SetField(DraftField::MilestoneDescription, "Three steps".into()));
        assert!(draft.is_valid());
    }

    #[test]
    fn test_switching_type_keeps_other_fields() {
        let draft = EntryDraft::new(today())
            .with(DraftAction::SetField(DraftField::FavoriteAnswer, "Blue".into()))
            .with(DraftAction::SetType(EntryType::Memory))
            .with(DraftAction::SetType(EntryType::Favorite));
        assert_eq!(draft.field(DraftField::FavoriteAnswer), "Blue");
    }

    #[test]
    fn test_reset_clears_everything_but_date() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        let mut draft = measurement_draft("Height", "120", "cm").with(DraftAction::SetDate(date));
        draft.apply(DraftAction::Reset);
        assert_eq!(draft, EntryDraft::new(date));
    }

    #[test]
    fn test_to_new_entry_measurement() {
        let draft = measurement_draft(" Height ", "120.5", "cm");
        let new_entry = draft.to_new_entry().unwrap();
        assert_eq!(
            new_entry.kind,
            EntryKind::Measurement {
                measurement: "Height".to_string(),
                value: 120.5,
                unit: "cm".to_string(),
            }
        );
        assert_eq!(Some(new_entry.profile_id), draft.profile);
    }

    #[test]
    fn test_to_new_entry_rejects_non_numeric_value() {
        let draft = measurement_draft("Height", "tall", "cm");
        match draft.to_new_entry().unwrap_err() {
            MemoriesError::Validation(msg) => assert!(msg.contains("'tall'")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_to_new_entry_invalid_lists_missing_fields() {
        let draft = EntryDraft::new(today()).with(DraftAction::SetType(EntryType::Memory));
        match draft.to_new_entry().unwrap_err() {
            MemoriesError::Validation(msg) => {
                assert_eq!(msg, "Memory entry is missing: profile, title, description")
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_mood_becomes_none() {
        let draft = EntryDraft::new(today())
            .with(DraftAction::SelectProfile(ProfileId::generate()))
            .with(DraftAction::SetType(EntryType::Memory))
            .with(DraftAction::SetField(DraftField::MemoryTitle, "Beach".into()))
            .with(DraftAction::SetField(DraftField::MemoryDescription, "Sandcastles".into()))
            .with(DraftAction::SetField(DraftField::MemoryMood, "  ".into()));

        match draft.to_new_entry().unwrap().kind {
            EntryKind::Memory { mood, .. } => assert_eq!(mood, None),
            other => panic!("Expected Memory, got {:?}", other),
        }
    }
}
