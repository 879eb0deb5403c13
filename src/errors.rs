use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] crate::framework::config::Error),

    #[error(transparent)]
    Dictionary(#[from] crate::dictionary::Error),

    #[error(transparent)]
    Game(#[from] crate::games::dictle::Error),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
