//! Calendar age.

use chrono::{Datelike, Local, NaiveDate};

const DOB_FORMAT: &str = "%Y-%m-%d";

/// Whole years between `dob` and `today`. One year is only counted once its
/// anniversary (month, day) has been reached.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - dob.year();

    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years - 1
    } else {
        years
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_dob(dob: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(dob.trim(), DOB_FORMAT).ok()
}

/// The current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::{age_on, parse_dob};

    fn date(s: &str) -> NaiveDate {
        parse_dob(s).unwrap()
    }

    #[test]
    fn test_birthday_reached() {
        assert_eq!(age_on(date("1996-04-15"), date("2024-04-15")), 28);
    }

    #[test]
    fn test_day_before_birthday() {
        assert_eq!(age_on(date("1996-04-15"), date("2024-04-14")), 27);
    }

    #[test]
    fn test_birthday_later_in_year() {
        assert_eq!(age_on(date("2000-12-03"), date("2024-01-01")), 23);
    }

    #[test]
    fn test_leap_day_birthday() {
        // Feb 29 counts once Mar 1 arrives in non-leap years
        assert_eq!(age_on(date("2000-02-29"), date("2023-02-28")), 22);
        assert_eq!(age_on(date("2000-02-29"), date("2023-03-01")), 23);
    }

    #[test]
    fn test_parse_dob() {
        assert_eq!(
            parse_dob(" 1998-08-23 "),
            NaiveDate::from_ymd_opt(1998, 8, 23)
        );
        assert_eq!(parse_dob("1998-02-30"), None);
        assert_eq!(parse_dob("23/08/1998"), None);
    }
}
