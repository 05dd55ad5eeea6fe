//! Core state for the team roster: profile records, the in-memory store that
//! holds them, and the selection that decides which one is open for editing.

use thiserror::Error;

pub mod age;
pub mod card;
pub mod fs;
pub mod profile;
pub mod session;

pub use card::ProfileCard;
pub use profile::{Field, Gender, MaritalStatus, ProfileId, ProfileRecord};
pub use session::{ProfileStore, Selection, Session};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No profile with id {0}")]
    UnknownProfile(ProfileId),
    #[error("Unknown profile field '{0}'")]
    UnknownField(String),
    #[error("Profile id {0} is used more than once")]
    DuplicateId(ProfileId),
    #[error("Could not locate the home directory")]
    NoHomeDirectory,
    #[error("I/O error {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
