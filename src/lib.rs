#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

pub mod cli;
pub use cli::Cli;

/// Looking words up in the dictionary.
pub mod dictionary;

mod errors;
pub use errors::{Error, Result};

pub mod framework;
pub use framework::Config;

pub mod games;

/// Playing in a terminal.
pub mod terminal;
