//! Scenario files: TOML fixtures that populate a session.
//!
//! A scenario declares profiles under short keys, entries that refer to
//! those keys, and optional follow-up steps (update, delete, activate).
//! Nothing is written back; a scenario only builds an in-memory session.
//!
//! ```toml
//! today = "2024-06-01"
//!
//! [[profile]]
//! key = "kai"
//! name = "Kai"
//! birthday = "2020-01-01"
//!
//! [[entry]]
//! profile = "kai"
//! type = "Favorite"
//! date = "2024-03-20"
//! category = "Color"
//! answer = "Blue"
//!
//! [[step]]
//! action = "set_active"
//! profile = "kai"
//! ```

use crate::application::Session;
use crate::domain::{parse_date, DraftAction, DraftField, EntryDraft, EntryType, ProfileId};
use crate::error::{MemoriesError, Result};
use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    /// Reference date for relative dates and ages; the real date if absent
    #[serde(default)]
    pub today: Option<String>,
    /// Profile key to activate once all profiles are added
    #[serde(default)]
    pub active: Option<String>,
    #[serde(default, rename = "profile")]
    pub profiles: Vec<ProfileRecord>,
    #[serde(default, rename = "entry")]
    pub entries: Vec<EntryRecord>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRecord {
    pub key: String,
    pub name: String,
    pub birthday: String,
}

/// Measurement values may be written as TOML numbers or strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn as_text(&self) -> String {
        match self {
            FieldValue::Number(value) => value.to_string(),
            FieldValue::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecord {
    /// Profile key; the active profile when omitted
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub date: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub measurement: Option<String>,
    #[serde(default)]
    pub value: Option<FieldValue>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    UpdateProfile {
        profile: String,
        name: String,
        birthday: String,
    },
    DeleteProfile {
        profile: String,
    },
    SetActive {
        profile: String,
    },
}

/// Result of applying a scenario
#[derive(Debug, Clone)]
pub struct LoadedScenario {
    pub today: NaiveDate,
    pub keys: BTreeMap<String, ProfileId>,
}

impl LoadedScenario {
    pub fn profile_id(&self, key: &str) -> Result<ProfileId> {
        self.keys
            .get(key)
            .copied()
            .ok_or_else(|| MemoriesError::UnknownProfileKey(key.to_string()))
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Populate `session`. `system_today` resolves the `today` field itself.
    pub fn apply(&self, session: &mut Session, system_today: NaiveDate) -> Result<LoadedScenario> {
        let today = match &self.today {
            Some(input) => parse_date(input, system_today)?,
            None => system_today,
        };
        let mut loaded = LoadedScenario {
            today,
            keys: BTreeMap::new(),
        };

        for record in &self.profiles {
            if loaded.keys.contains_key(&record.key) {
                return Err(MemoriesError::Validation(format!(
                    "Duplicate profile key: '{}'",
                    record.key
                )));
            }
            let birthday = parse_date(&record.birthday, today)?;
            let profile = session.profiles.add_profile(&record.name, birthday)?;
            loaded.keys.insert(record.key.clone(), profile.id);
        }

        if let Some(key) = &self.active {
            session.profiles.set_active_profile(loaded.profile_id(key)?)?;
        }

        for record in &self.entries {
            let mut draft = record.to_draft(session, &loaded)?;
            session.submit_draft(&mut draft)?;
        }

        for step in &self.steps {
            debug!("Applying scenario step: {:?}", step);
            match step {
                Step::UpdateProfile {
                    profile,
                    name,
                    birthday,
                } => {
                    let id = loaded.profile_id(profile)?;
                    let birthday = parse_date(birthday, today)?;
                    session.profiles.update_profile(id, name, birthday)?;
                }
                Step::DeleteProfile { profile } => {
                    session.profiles.delete_profile(loaded.profile_id(profile)?);
                }
                Step::SetActive { profile } => {
                    session.profiles.set_active_profile(loaded.profile_id(profile)?)?;
                }
            }
        }

        Ok(loaded)
    }
}

impl EntryRecord {
    /// Fill an entry draft the way the form would
    fn to_draft(&self, session: &Session, loaded: &LoadedScenario) -> Result<EntryDraft> {
        let entry_type = EntryType::from_str(&self.entry_type).map_err(MemoriesError::Validation)?;
        let date = parse_date(&self.date, loaded.today)?;

        let mut draft = EntryDraft::new(date).with(DraftAction::SetType(entry_type));
        match &self.profile {
            Some(key) => draft.apply(DraftAction::SelectProfile(loaded.profile_id(key)?)),
            None => {
                if let Some(id) = session.profiles.active_profile_id() {
                    draft.apply(DraftAction::SelectProfile(id));
                }
            }
        }

        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let fields: Vec<(DraftField, String)> = match entry_type {
            EntryType::Favorite => vec![
                (DraftField::FavoriteCategory, text(&self.category)),
                (DraftField::FavoriteAnswer, text(&self.answer)),
            ],
            EntryType::Measurement => vec![
                (DraftField::MeasurementType, text(&self.measurement)),
                (
                    DraftField::MeasurementValue,
                    self.value.as_ref().map(FieldValue::as_text).unwrap_or_default(),
                ),
                (DraftField::MeasurementUnit, text(&self.unit)),
            ],
            EntryType::Memory => vec![
                (DraftField::MemoryTitle, text(&self.title)),
                (DraftField::MemoryDescription, text(&self.description)),
                (DraftField::MemoryMood, text(&self.mood)),
            ],
            EntryType::Journal => vec![
                (DraftField::JournalTitle, text(&self.title)),
                (DraftField::JournalContent, text(&self.content)),
            ],
            EntryType::Milestone => vec![
                (DraftField::MilestoneTitle, text(&self.title)),
                (DraftField::MilestoneDescription, text(&self.description)),
                (DraftField::MilestoneCategory, text(&self.category)),
            ],
        };

        for (field, value) in fields {
            let custom = !field.suggestions().is_empty()
                && !value.trim().is_empty()
                && !field.is_suggested(&value);
            if custom {
                debug!("Custom {:?} value in scenario: {}", field, value);
            }
            draft.apply(DraftAction::SetField(field, value));
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryKind;

    fn system_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    const FAMILY: &str = r#"
today = "2024-06-01"

[[profile]]
key = "kai"
name = "Kai"
birthday = "2020-01-01"

[[profile]]
key = "mia"
name = "Mia"
birthday = "2022-06-15"

[[entry]]
profile = "kai"
type = "Favorite"
date = "2024-03-20"
category = "Color"
answer = "Blue"

[[entry]]
profile = "mia"
type = "Measurement"
date = "yesterday"
measurement = "Height"
value = 80
unit = "cm"

[[entry]]
type = "Memory"
date = "2023-12-25"
title = "Christmas"
description = "Family and friends"
"#;

    #[test]
    fn test_parse_and_apply() {
        let scenario = Scenario::parse(FAMILY).unwrap();
        let mut session = Session::new();
        let loaded = scenario.apply(&mut session, system_today()).unwrap();

        assert_eq!(loaded.today, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(session.profiles.len(), 2);
        assert_eq!(session.entries.len(), 3);
        assert_eq!(
            session.profiles.active_profile_id(),
            Some(loaded.profile_id("kai").unwrap())
        );
    }

    #[test]
    fn test_relative_dates_use_scenario_today() {
        let scenario = Scenario::parse(FAMILY).unwrap();
        let mut session = Session::new();
        scenario.apply(&mut session, system_today()).unwrap();

        let measurement = &session.entries.entries()[1];
        assert_eq!(measurement.date, NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
        assert_eq!(
            measurement.kind,
            EntryKind::Measurement {
                measurement: "Height".to_string(),
                value: 80.0,
                unit: "cm".to_string(),
            }
        );
    }

    #[test]
    fn test_entry_without_profile_uses_active() {
        let scenario = Scenario::parse(FAMILY).unwrap();
        let mut session = Session::new();
        let loaded = scenario.apply(&mut session, system_today()).unwrap();

        let memory = &session.entries.entries()[2];
        assert_eq!(memory.profile_id, loaded.profile_id("kai").unwrap());
    }

    #[test]
    fn test_steps_run_after_entries() {
        let contents = format!(
            "{}\n{}",
            FAMILY,
            r#"
[[step]]
action = "delete_profile"
profile = "kai"

[[step]]
action = "update_profile"
profile = "mia"
name = "Amelia"
birthday = "2022-06-16"
"#
        );
        let scenario = Scenario::parse(&contents).unwrap();
        let mut session = Session::new();
        let loaded = scenario.apply(&mut session, system_today()).unwrap();

        let mia = loaded.profile_id("mia").unwrap();
        assert_eq!(session.profiles.active_profile_id(), Some(mia));
        assert_eq!(session.profiles.get(mia).unwrap().name, "Amelia");
        // Deleting a profile leaves its entries in place
        assert_eq!(session.entries.len(), 3);
    }

    #[test]
    fn test_active_key_selects_profile() {
        let contents = FAMILY.replacen("today = \"2024-06-01\"", "today = \"2024-06-01\"\nactive = \"mia\"", 1);
        let scenario = Scenario::parse(&contents).unwrap();
        let mut session = Session::new();
        let loaded = scenario.apply(&mut session, system_today()).unwrap();

        let mia = loaded.profile_id("mia").unwrap();
        assert_eq!(session.profiles.active_profile_id(), Some(mia));
        // The memory without a profile key lands on the active profile
        assert_eq!(session.entries.entries()[2].profile_id, mia);
    }

    #[test]
    fn test_unknown_profile_key() {
        let scenario = Scenario::parse(
            r#"
[[entry]]
profile = "ghost"
type = "Journal"
date = "2024-01-01"
title = "Boo"
content = "..."
"#,
        )
        .unwrap();

        match scenario.apply(&mut Session::new(), system_today()).unwrap_err() {
            MemoriesError::UnknownProfileKey(key) => assert_eq!(key, "ghost"),
            other => panic!("Expected UnknownProfileKey, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_entry_is_validation_error() {
        let scenario = Scenario::parse(
            r#"
[[profile]]
key = "kai"
name = "Kai"
birthday = "2020-01-01"

[[entry]]
type = "Measurement"
date = "2024-01-01"
measurement = "Height"
value = "120"
"#,
        )
        .unwrap();

        match scenario.apply(&mut Session::new(), system_today()).unwrap_err() {
            MemoriesError::Validation(msg) => assert!(msg.contains("unit")),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_profile_key() {
        let scenario = Scenario::parse(
            r#"
[[profile]]
key = "kai"
name = "Kai"
birthday = "2020-01-01"

[[profile]]
key = "kai"
name = "Other Kai"
birthday = "2021-01-01"
"#,
        )
        .unwrap();

        assert!(matches!(
            scenario.apply(&mut Session::new(), system_today()),
            Err(MemoriesError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_entry_type() {
        let scenario = Scenario::parse(
            r#"
[[entry]]
type = "Diary"
date = "2024-01-01"
"#,
        )
        .unwrap();

        match scenario.apply(&mut Session::new(), system_today()).unwrap_err() {
            MemoriesError::Validation(msg) => assert!(msg.contains("Invalid entry type")),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_step_action_fails_to_parse() {
        let result = Scenario::parse(
            r#"
[[step]]
action = "explode"
profile = "kai"
"#,
        );
        assert!(matches!(result, Err(MemoriesError::TomlDeserialize(_))));
    }
}
