use tracing::debug;

use crate::profile::ProfileId;

/// Which profile, if any, is open for editing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Editing(ProfileId),
}

impl Selection {
    /// Open `id` for editing. Does not check that the profile exists, see
    /// [`Session::select`](crate::Session::select) for the checked variant.
    pub fn select(&mut self, id: ProfileId) {
        debug!("Selected profile {id}");
        *self = Selection::Editing(id);
    }

    pub fn clear(&mut self) {
        if let Selection::Editing(id) = self {
            debug!("Deselected profile {id}");
        }
        *self = Selection::Idle;
    }

    pub fn current(&self) -> Option<ProfileId> {
        match self {
            Selection::Idle => None,
            Selection::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Selection::Editing(_))
    }
}
