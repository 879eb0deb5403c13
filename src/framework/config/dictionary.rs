use std::{num::NonZeroU64, time::Duration};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryClient;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    pub base_url: Url,
    /// Zero is rejected, it would fail every lookup.
    pub timeout_secs: NonZeroU64,
    pub user_agent: String,
}

impl DictionaryConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.get())
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DictionaryClient::DEFAULT_BASE_URL)
                .expect("hard-coded base url should be valid"),
            timeout_secs: NonZeroU64::new(DictionaryClient::DEFAULT_TIMEOUT.as_secs())
                .expect("default timeout should be non-zero"),
            user_agent: DictionaryClient::DEFAULT_USER_AGENT.to_owned(),
        }
    }
}
