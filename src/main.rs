use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info};

use dictle::{
    cli::Command,
    dictionary::DictionaryClient,
    framework::{self, Config},
    games::dictle::{GameHandle, GameOptions, WordsList},
    terminal, Cli,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    framework::logging::init_tracing(&cli.log_filter);

    info!(version = env!("CARGO_PKG_VERSION"), "starting dictle");

    let mut config = Config::load(&cli.config)?;
    cli.apply(&mut config);
    debug!(?config, "config loaded");

    if cli.command() == Command::Config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let words = WordsList::from_config(&config.game)?;
    let client = DictionaryClient::from_config(&config.dictionary)?;
    debug!(base_url = %client.base_url(), "dictionary client ready");

    let handle = GameHandle::start(
        &words,
        &mut cli.rng(),
        Arc::new(client),
        GameOptions::from(&config.game),
    );

    let ending = terminal::play(handle).await?;
    info!(?ending, "game over");

    Ok(())
}
