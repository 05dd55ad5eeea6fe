use std::io::{self, Write};

use chrono::NaiveDate;
use colored::Colorize;
use roster_lib::{Field, ProfileCard, ProfileRecord};
use strum::IntoEnumIterator;

/// Print a compact card: name, career, description and the detail line.
pub fn card(out: &mut impl Write, card: &ProfileCard) -> io::Result<()> {
    let age = match card.age {
        Some(age) => format!("{age} years"),
        None => "Unknown age".to_string(),
    };

    writeln!(
        out,
        "{} {}",
        format!("#{}", card.id).dimmed(),
        card.name.bold()
    )?;
    writeln!(out, "   {}", card.career.cyan())?;
    writeln!(out, "   {}", card.description)?;
    writeln!(
        out,
        "   {} · {} · {}",
        card.gender, age, card.marital_status
    )?;
    writeln!(out)
}

/// Print every field of a profile, one per line.
pub fn details(out: &mut impl Write, profile: &ProfileRecord, today: NaiveDate) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        format!("#{}", profile.id()).dimmed(),
        profile.name().bold()
    )?;

    for field in Field::iter() {
        writeln!(out, "{}: {}", field.label(), profile.value(field))?;
    }

    match profile.age_on(today) {
        Some(age) => writeln!(out, "Age: {age}"),
        None => writeln!(out, "Age: unknown"),
    }
}
