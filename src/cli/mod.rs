//! Command-line surface over the record store.

pub mod commands;
pub mod table;
pub mod views;

use thiserror::Error;

use crate::errors::TrackerError;

pub use commands::{run, Command};

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("{0}")]
    Usage(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Core(TrackerError::Io(err))
    }
}

pub const USAGE: &str = "Usage: profit_tracker_cli <command>\n\
Commands:\n  \
add [date] [new] [revenue] [returning] [repeat] [ads]\n  \
set <id> <field> <value>\n  \
delete <id>\n  \
daily | weekly | monthly | summary\n  \
import <file.csv>\n  \
export [file.csv | directory]\n  \
sample\n  \
clear\n  \
version";
