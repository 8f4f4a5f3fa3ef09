//! Entry store: every journal entry of a session in creation order

use crate::domain::{Entry, EntryId, NewEntry, ProfileId};
use log::info;

#[derive(Debug, Default, Clone)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh id and append.
    ///
    /// The profile id is taken as given; it is not checked against any
    /// profile store.
    pub fn add_entry(&mut self, new_entry: NewEntry) -> Entry {
        let entry = Entry::from_new(self.next_id(), new_entry);
        info!(
            "Added {} entry {} for profile {} dated {}",
            entry.entry_type(),
            entry.id,
            entry.profile_id,
            entry.date
        );
        self.entries.push(entry.clone());
        entry
    }

    /// Entries in creation order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries attached to `profile_id`, in creation order
    pub fn for_profile(&self, profile_id: ProfileId) -> impl Iterator<Item = &Entry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.profile_id == profile_id)
    }

    // v4 collisions are not expected, but ids must never repeat within a store.
    fn next_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}
