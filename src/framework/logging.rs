use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use tracing::{instrument, trace, warn};

pub const DEFAULT_FILTER: &str = "dictle=warn";

/// `RUST_LOG` wins over `filter`. Logs go to stderr so they stay out of the game.
#[instrument]
pub fn init_tracing(filter: &str) {
    let (env_filter, invalid) = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => (env_filter, false),
        Err(_) => match EnvFilter::try_new(filter) {
            Ok(env_filter) => (env_filter, false),
            Err(_) => (EnvFilter::new(DEFAULT_FILTER), true),
        },
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    if invalid {
        warn!(filter, "invalid log filter, using {DEFAULT_FILTER}");
    }

    trace!("finished");
}
