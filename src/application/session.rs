//! Session: the application root owning both stores

use crate::application::{EntryStore, ProfileStore};
use crate::domain::{DraftAction, Entry, EntryDraft};
use crate::error::Result;
use chrono::NaiveDate;
use log::debug;

/// One running journal. Created once at startup and lent to whatever needs
/// the stores; dropped on exit.
#[derive(Debug, Default)]
pub struct Session {
    pub profiles: ProfileStore,
    pub entries: EntryStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh draft dated `date` with the active profile pre-selected
    pub fn new_draft(&self, date: NaiveDate) -> EntryDraft {
        let mut draft = EntryDraft::new(date);
        if let Some(id) = self.profiles.active_profile_id() {
            draft.apply(DraftAction::SelectProfile(id));
        }
        draft
    }

    /// Store the draft as an entry and reset it.
    ///
    /// An invalid draft is left as it was.
    pub fn submit_draft(&mut self, draft: &mut EntryDraft) -> Result<Entry> {
        submit_draft(draft, &mut self.entries)
    }
}

/// Store the draft in `entries` and reset it
pub fn submit_draft(draft: &mut EntryDraft, entries: &mut EntryStore) -> Result<Entry> {
    let new_entry = draft.to_new_entry()?;
    let entry = entries.add_entry(new_entry);
    draft.apply(DraftAction::Reset);
    debug!("Draft submitted as entry {}, draft reset", entry.id);
    Ok(entry)
}
