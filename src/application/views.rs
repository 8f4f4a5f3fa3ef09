//! Derived read-only views over the stores

use crate::application::ProfileStore;
use crate::domain::{Entry, EntryKind, EntryType, Profile, ProfileId};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// One-line projection of an entry for cards and lists
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySummary {
    pub entry_type: EntryType,
    pub date: NaiveDate,
    pub headline: String,
    pub body: String,
}

impl From<&Entry> for EntrySummary {
    fn from(entry: &Entry) -> Self {
        EntrySummary {
            entry_type: entry.entry_type(),
            date: entry.date,
            headline: entry.kind.headline(),
            body: entry.kind.body(),
        }
    }
}

/// Sort newest first. The sort is stable, so same-day entries keep
/// creation order.
fn newest_first(mut entries: Vec<&Entry>) -> Vec<&Entry> {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// Entries of the active profile, newest first. Empty without an active profile.
pub fn timeline(entries: &[Entry], active: Option<ProfileId>) -> Vec<&Entry> {
    let Some(active) = active else {
        return Vec::new();
    };
    newest_first(
        entries
            .iter()
            .filter(|entry| entry.profile_id == active)
            .collect(),
    )
}

/// Favorite entries of a profile, newest first
pub fn favorites(entries: &[Entry], profile_id: ProfileId) -> Vec<&Entry> {
    newest_first(
        entries
            .iter()
            .filter(|entry| {
                entry.profile_id == profile_id && matches!(entry.kind, EntryKind::Favorite { .. })
            })
            .collect(),
    )
}

/// Latest-dated entry; the earliest created wins a tie
pub fn most_recent(entries: &[Entry]) -> Option<&Entry> {
    entries
        .iter()
        .fold(None, |best: Option<&Entry>, entry| match best {
            Some(current) if current.date >= entry.date => Some(current),
            _ => Some(entry),
        })
}

/// Home screen statistics
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total_entries: usize,
    pub counts: BTreeMap<EntryType, usize>,
    pub favorite_categories: usize,
    pub most_recent: Option<EntrySummary>,
}

impl Dashboard {
    pub fn count(&self, entry_type: EntryType) -> usize {
        self.counts.get(&entry_type).copied().unwrap_or(0)
    }
}

pub fn dashboard(entries: &[Entry]) -> Dashboard {
    let mut counts: BTreeMap<EntryType, usize> =
        EntryType::ALL.iter().map(|entry_type| (*entry_type, 0)).collect();
    let mut categories = BTreeSet::new();

    for entry in entries {
        *counts.entry(entry.entry_type()).or_insert(0) += 1;
        if let EntryKind::Favorite { category, .. } = &entry.kind {
            categories.insert(category.to_lowercase());
        }
    }

    Dashboard {
        total_entries: entries.len(),
        counts,
        favorite_categories: categories.len(),
        most_recent: most_recent(entries).map(EntrySummary::from),
    }
}

/// A profile as shown on the profiles screen
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard<'a> {
    pub profile: &'a Profile,
    pub age: u32,
    pub active: bool,
}

/// Every profile in store order with its age on `today`
pub fn profile_overview(store: &ProfileStore, today: NaiveDate) -> Vec<ProfileCard<'_>> {
    let active = store.active_profile_id();
    store
        .profiles()
        .iter()
        .map(|profile| ProfileCard {
            profile,
            age: profile.age_on(today),
            active: Some(profile.id) == active,
        })
        .collect()
}
