use std::path::Path;

use ::config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

mod dictionary;
pub use dictionary::DictionaryConfig;

mod game;
pub use game::GameConfig;

/// Prefix for environment overrides, e.g. `DICTLE_DICTIONARY__TIMEOUT_SECS=5`.
pub const ENV_PREFIX: &str = "DICTLE";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(::config::ConfigError),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub dictionary: DictionaryConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Layers `DICTLE_*` environment variables over a toml file.
    ///
    /// A missing file is fine; every setting has a default.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!(exists = path.exists(), "loading config");

        ::config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }

    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        ::config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }
}
