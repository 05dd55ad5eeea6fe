use chrono::NaiveDate;
use tracing::debug;

use crate::{
    Error, Result,
    card::ProfileCard,
    profile::{Field, ProfileId, ProfileRecord},
};

mod selection;
mod store;

pub use selection::Selection;
pub use store::ProfileStore;

/// All state of one editing session.
///
/// Owns the [`ProfileStore`] and the [`Selection`]. Every mutation goes through
/// the store's field update or the selection's transitions, so a selected id
/// always refers to a profile in the store.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: ProfileStore,
    selection: Selection,
}

impl Session {
    pub fn new(store: ProfileStore) -> Self {
        Self {
            store,
            selection: Selection::Idle,
        }
    }

    /// A session over the sample team.
    pub fn seeded() -> Self {
        Self::new(ProfileStore::seeded())
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn profiles(&self) -> &[ProfileRecord] {
        self.store.list()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Open a profile for editing. Fails, leaving the selection untouched, if no
    /// profile has this id.
    pub fn select(&mut self, id: ProfileId) -> Result<()> {
        if !self.store.contains(id) {
            return Err(Error::UnknownProfile(id));
        }

        self.selection.select(id);
        Ok(())
    }

    pub fn current(&self) -> Option<ProfileId> {
        self.selection.current()
    }

    /// The profile currently open for editing.
    pub fn selected(&self) -> Option<&ProfileRecord> {
        self.current().and_then(|id| self.store.get(id))
    }

    /// Write a field of the selected profile. Does nothing while idle.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.current() {
            Some(id) => self.store.update_field(id, field, value),
            None => {
                debug!("Ignoring edit of {field}, no profile selected");
                false
            }
        }
    }

    pub fn update_field(&mut self, id: ProfileId, field: Field, value: impl Into<String>) -> bool {
        self.store.update_field(id, field, value)
    }

    /// Finish editing. Edits were already written, so this only closes the form.
    pub fn submit(&mut self) {
        self.selection.clear();
    }

    /// Close the form. Same transition as [`Session::submit`].
    pub fn close(&mut self) {
        self.selection.clear();
    }

    /// Cards for every profile, in display order.
    pub fn cards(&self, today: NaiveDate) -> Vec<ProfileCard> {
        self.store
            .list()
            .iter()
            .map(|record| ProfileCard::from_record(record, today))
            .collect()
    }
}
