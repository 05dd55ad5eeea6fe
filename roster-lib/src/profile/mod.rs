//! Team member profiles.
//!
//! A [`ProfileRecord`] stores every field as text. The option sets shown by the
//! editing controls ([`Gender`], [`MaritalStatus`]) are not enforced here: any
//! text written to those fields is kept verbatim.

use chrono::NaiveDate;
use derive_more::{Display, From, FromStr};
use getset::{CopyGetters, Getters};

use crate::age;

mod field;
pub(crate) mod seed;

pub use field::{Field, Gender, MaritalStatus};

/// Stable identifier of a profile. Assigned once and never reused.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    From,
    FromStr,
)]
pub struct ProfileId(u64);

impl ProfileId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct ProfileRecord {
    #[getset(get_copy = "pub")]
    id: ProfileId,
    #[getset(get = "pub")]
    name: String,
    /// Avatar URL, never fetched or validated
    #[getset(get = "pub")]
    image: String,
    #[getset(get = "pub")]
    description: String,
    #[getset(get = "pub")]
    gender: String,
    /// Birth date, expected as `YYYY-MM-DD`
    #[getset(get = "pub")]
    dob: String,
    #[getset(get = "pub")]
    marital_status: String,
    #[getset(get = "pub")]
    education: String,
    #[getset(get = "pub")]
    career: String,
    #[getset(get = "pub")]
    career_status: String,
}

impl ProfileRecord {
    /// Create a record with the given id and every other field empty.
    pub fn new(id: ProfileId) -> Self {
        Self {
            id,
            name: String::new(),
            image: String::new(),
            description: String::new(),
            gender: String::new(),
            dob: String::new(),
            marital_status: String::new(),
            education: String::new(),
            career: String::new(),
            career_status: String::new(),
        }
    }

    /// Builder style counterpart to [`ProfileRecord::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Read any editable field by name.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Image => &self.image,
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Gender => &self.gender,
            Field::Dob => &self.dob,
            Field::MaritalStatus => &self.marital_status,
            Field::Education => &self.education,
            Field::Career => &self.career,
            Field::CareerStatus => &self.career_status,
        }
    }

    /// Replace a single field. The id is not a [`Field`] and so can never change.
    pub(crate) fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Image => &mut self.image,
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Gender => &mut self.gender,
            Field::Dob => &mut self.dob,
            Field::MaritalStatus => &mut self.marital_status,
            Field::Education => &mut self.education,
            Field::Career => &mut self.career,
            Field::CareerStatus => &mut self.career_status,
        };
        *slot = value.into();
    }

    /// The stored gender, if it is one of the offered options.
    pub fn gender_option(&self) -> Option<Gender> {
        self.gender.parse().ok()
    }

    /// The stored marital status, if it is one of the offered options.
    pub fn marital_status_option(&self) -> Option<MaritalStatus> {
        self.marital_status.parse().ok()
    }

    /// Parsed birth date, or `None` if the stored text isn't an ISO calendar date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        age::parse_dob(&self.dob)
    }

    /// Age in whole years as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        self.birth_date().map(|dob| age::age_on(dob, today))
    }

    /// Age in whole years as of the local current date. Recomputed on every call.
    pub fn age(&self) -> Option<i32> {
        self.age_on(age::today())
    }
}
