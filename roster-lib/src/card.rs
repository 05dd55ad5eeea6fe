use chrono::NaiveDate;

use crate::profile::{ProfileId, ProfileRecord};

/// Read-only summary of a profile as shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub id: ProfileId,
    pub image: String,
    pub name: String,
    pub career: String,
    pub description: String,
    pub gender: String,
    /// `None` when the stored birth date can't be parsed
    pub age: Option<i32>,
    pub marital_status: String,
}

impl ProfileCard {
    pub fn from_record(record: &ProfileRecord, today: NaiveDate) -> Self {
        Self {
            id: record.id(),
            image: record.image().clone(),
            name: record.name().clone(),
            career: record.career().clone(),
            description: record.description().clone(),
            gender: record.gender().clone(),
            age: record.age_on(today),
            marital_status: record.marital_status().clone(),
        }
    }

    /// Up to two uppercase initials taken from the name, used as avatar text.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
