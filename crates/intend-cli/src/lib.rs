mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, LexiconCommand, OutputFormat, PatientCommand, SessionCommand};
pub use commands::run;
