use std::io::Write;

use clap::Subcommand;
use roster_lib::{Error, Field, ProfileCard, ProfileId, Result, Session, age};

use crate::render;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every profile card
    List,
    /// Show all fields of one profile
    Show { id: ProfileId },
    /// Change one field of a profile and print the result
    Edit {
        id: ProfileId,
        /// Field name, e.g. `career` or `maritalStatus`
        field: String,
        value: String,
    },
}

pub fn handle(session: &mut Session, cmd: &Command, out: &mut impl Write) -> Result<()> {
    let today = age::today();

    match cmd {
        Command::List => {
            for card in session.cards(today) {
                render::card(out, &card)?;
            }
        }
        Command::Show { id } => {
            let profile = session.store().get(*id).ok_or(Error::UnknownProfile(*id))?;
            render::details(out, profile, today)?;
        }
        Command::Edit { id, field, value } => {
            let field = Field::from_name(field)?;

            session.select(*id)?;
            session.edit(field, value.as_str());
            session.submit();

            let profile = session.store().get(*id).ok_or(Error::UnknownProfile(*id))?;
            render::card(out, &ProfileCard::from_record(profile, today))?;
        }
    }

    Ok(())
}
