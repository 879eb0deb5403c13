use reqwest::{StatusCode, Url};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error from reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("dictionary api responded with {0}")]
    Status(StatusCode),

    #[error("couldn't decode dictionary response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} can't be used as a base url")]
    InvalidBase(Url),
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Reqwest(err) if err.is_timeout())
    }
}
