use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{
    Error, Result,
    profile::{Field, ProfileId, ProfileRecord, seed},
};

/// Ordered, in-memory collection of profiles.
///
/// Records can only be replaced field by field; nothing is ever inserted or
/// removed after construction, so insertion order is also display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStore {
    records: Vec<ProfileRecord>,
}

impl ProfileStore {
    pub fn new(records: Vec<ProfileRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(Error::DuplicateId(record.id()));
            }
        }

        Ok(Self { records })
    }

    /// A store holding the sample team.
    pub fn seeded() -> Self {
        Self {
            records: seed::records(),
        }
    }

    pub fn list(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn get(&self, id: ProfileId) -> Option<&ProfileRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: ProfileId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace `field` of the profile with `id`. No validation is performed.
    ///
    /// Unknown ids are ignored. Returns whether a profile was updated.
    pub fn update_field(&mut self, id: ProfileId, field: Field, value: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.set(field, value);
                debug!("Updated {field} of profile {id}");
                true
            }
            None => {
                warn!("Ignoring update of {field} for unknown profile {id}");
                false
            }
        }
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::seeded()
    }
}
