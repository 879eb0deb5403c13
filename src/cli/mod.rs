use std::path::PathBuf;

use rand::{rngs::StdRng, SeedableRng};

use crate::{framework::logging::DEFAULT_FILTER, games::dictle::MaskStyle, Config};

/// Guess the word from its dictionary definitions.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Toml config file; it's fine if it doesn't exist
    #[arg(long, env = "DICTLE_CONFIG", default_value = "dictle.toml")]
    pub config: PathBuf,

    /// Pick the word deterministically
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overrides `game.mask` from the config
    #[arg(long, value_enum)]
    pub mask: Option<MaskStyle>,

    /// Log filter, used when RUST_LOG isn't set
    #[arg(long, env = "DICTLE_LOG", default_value = DEFAULT_FILTER)]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Applies command line overrides to a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(mask) = self.mask {
            config.game.mask = mask;
        }
    }
}

#[derive(clap::Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a game (the default)
    #[default]
    Play,

    /// Print the resolved config and exit
    Config,
}
