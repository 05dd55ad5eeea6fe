use std::io;

use clap::Parser;
use colored::Colorize;
use roster_lib::{Error, Session};
use sysexits::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod profile;
mod render;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about)]
/// Browse and edit the team roster. Edits last for a single invocation.
struct Cli {
    #[command(subcommand)]
    command: profile::Command,
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();
    let mut session = Session::seeded();

    match profile::handle(&mut session, &cli.command, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::Ok,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            exit_code(&e)
        }
    }
}

fn exit_code(error: &Error) -> ExitCode {
    match error {
        Error::UnknownProfile(_) => ExitCode::DataErr,
        Error::UnknownField(_) => ExitCode::Usage,
        Error::Io(_) => ExitCode::IoErr,
        _ => ExitCode::Software,
    }
}
