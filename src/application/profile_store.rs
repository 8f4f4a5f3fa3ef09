//! Profile store: the child profiles of a session and the active pointer

use crate::domain::{Profile, ProfileId};
use crate::error::{MemoriesError, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};

/// In-memory owner of the profile list.
///
/// Profiles keep insertion order; the earliest remaining profile is the one
/// promoted when the active profile is deleted.
#[derive(Debug, Default, Clone)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    active: Option<ProfileId>,
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(MemoriesError::Validation(
            "Profile name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn active_profile_id(&self) -> Option<ProfileId> {
        self.active
    }

    pub fn active_profile(&self) -> Option<&Profile> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Add a profile. The first profile of an empty store becomes active.
    pub fn add_profile(&mut self, name: &str, birthday: NaiveDate) -> Result<Profile> {
        let name = validate_name(name)?;
        let profile = Profile::new(name, birthday);

        self.profiles.push(profile.clone());
        if self.active.is_none() && self.profiles.len() == 1 {
            self.active = Some(profile.id);
            debug!("Profile {} is the first profile, now active", profile.id);
        }

        info!("Added profile: {} ({})", profile.name, profile.id);
        Ok(profile)
    }

    /// Replace name and birthday. Unknown ids are ignored.
    pub fn update_profile(&mut self, id: ProfileId, name: &str, birthday: NaiveDate) -> Result<()> {
        let name = validate_name(name)?;

        match self.profiles.iter_mut().find(|profile| profile.id == id) {
            Some(profile) => {
                profile.name = name;
                profile.birthday = birthday;
                info!("Updated profile: {} ({})", profile.name, id);
            }
            None => warn!("Ignoring update of unknown profile: {}", id),
        }
        Ok(())
    }

    /// Remove a profile. Unknown ids are ignored.
    ///
    /// Entries referencing the profile are left untouched.
    pub fn delete_profile(&mut self, id: ProfileId) {
        let Some(index) = self.profiles.iter().position(|profile| profile.id == id) else {
            warn!("Ignoring delete of unknown profile: {}", id);
            return;
        };

        let removed = self.profiles.remove(index);
        info!("Deleted profile: {} ({})", removed.name, removed.id);

        if self.active == Some(id) {
            self.active = self.profiles.first().map(|profile| profile.id);
            match self.active {
                Some(next) => info!("Active profile moved to {}", next),
                None => info!("No profiles left, active profile cleared"),
            }
        }
    }

    /// Point the active profile at `id`.
    ///
    /// Fails with [`MemoriesError::ProfileNotFound`] for unknown ids and
    /// leaves the current active profile in place.
    pub fn set_active_profile(&mut self, id: ProfileId) -> Result<()> {
        if self.get(id).is_none() {
            warn!("Cannot activate unknown profile: {}", id);
            return Err(MemoriesError::ProfileNotFound(id.to_string()));
        }

        self.active = Some(id);
        info!("Active profile set to {}", id);
        Ok(())
    }
}
