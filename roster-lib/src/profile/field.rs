use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result};

/// Every editable field of a profile, in form order. The id is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Image,
    Name,
    Description,
    Gender,
    Dob,
    MaritalStatus,
    Education,
    Career,
    CareerStatus,
}

impl Field {
    /// Look up a field by its camelCase name, e.g. `careerStatus`.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| Error::UnknownField(name.to_string()))
    }

    /// Human friendly label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Image => "Profile Image URL",
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Gender => "Gender",
            Field::Dob => "Date of Birth",
            Field::MaritalStatus => "Marital Status",
            Field::Education => "Education",
            Field::Career => "Career",
            Field::CareerStatus => "Career Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Gender {
    Female,
    Male,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::{Field, Gender, MaritalStatus};
    use crate::Error;

    #[test]
    fn test_field_names() {
        let names: Vec<String> = Field::iter().map(|f| f.to_string()).collect();

        assert_eq!(
            names,
            [
                "image",
                "name",
                "description",
                "gender",
                "dob",
                "maritalStatus",
                "education",
                "career",
                "careerStatus"
            ]
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Field::from_name("career").unwrap(), Field::Career);
        assert_eq!(
            Field::from_name("maritalStatus").unwrap(),
            Field::MaritalStatus
        );
        assert!(matches!(
            Field::from_name("id"),
            Err(Error::UnknownField(name)) if name == "id"
        ));
        assert!(matches!(
            Field::from_name("Career"),
            Err(Error::UnknownField(_))
        ));
    }

    #[test]
    fn test_option_sets() {
        assert_eq!(
            Gender::iter().collect::<Vec<_>>(),
            [Gender::Female, Gender::Male, Gender::Other]
        );
        assert_eq!(MaritalStatus::iter().count(), 4);
        assert_eq!("Other".parse::<Gender>().unwrap(), Gender::Other);
        assert_eq!(MaritalStatus::Divorced.to_string(), "Divorced");
    }
}
