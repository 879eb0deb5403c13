//! Word lookups against the free dictionary api (dictionaryapi.dev).

use async_trait::async_trait;

mod client;
pub use client::DictionaryClient;

mod error;
pub use error::Error;

mod response;
pub use response::{Definition, Entry, Meaning};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Anything that can produce the definitions of a word.
///
/// A word the source doesn't know resolves to an empty list rather than an
/// error; errors are reserved for lookups that couldn't be completed.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    async fn fetch_definitions(&self, word: &str) -> Result<Vec<String>>;
}
