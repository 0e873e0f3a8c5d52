//! Crate implementing the CLI command.

mod cli;
mod run;

pub use self::cli::CliOpts;
pub use self::run::{Error, evaluate_translate};
