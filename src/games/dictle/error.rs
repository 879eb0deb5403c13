use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't read words file {}: {source}", .path.display())]
    ReadWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("words list is empty")]
    EmptyWords,
}
