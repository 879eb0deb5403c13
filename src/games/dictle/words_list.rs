use std::{fs, path::Path};

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument};

use crate::framework::config::GameConfig;

use super::Error;

/// The words a game can pick from when no words file is configured.
pub const WORDS: &[&str] = &[
    "abandon",
    "abbreviate",
    "abdomen",
    "ablaze",
    "collab",
    "dirty",
    "disable",
    "disc",
    "graffiti",
    "grain",
    "inexpert",
    "psychic",
    "public",
    "rooster",
    "tax",
    "unrelated",
    "warp",
    "barmen",
    "calm",
    "calories",
    "coagulated",
    "egg",
    "convict",
    "swearword",
    "encyclopedia",
    "unpleasant",
    "marketing",
    "tough",
    "recession",
    "bottom",
    "chaos",
    "humanity",
    "chair",
    "gain",
    "diet",
    "expect",
    "twist",
    "cause",
    "resist",
    "related",
    "admire",
    "emotion",
    "compose",
];

/// A non-empty list of candidate words.
#[derive(Debug, Clone, PartialEq)]
pub struct WordsList {
    words: Vec<String>,
}

impl WordsList {
    pub fn builtin() -> Self {
        Self {
            words: WORDS.iter().map(|&word| word.to_owned()).collect(),
        }
    }

    pub fn from_words<I>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            Err(Error::EmptyWords)
        } else {
            Ok(Self { words })
        }
    }

    /// One word per line. Blank lines and `#` comments are skipped.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadWords {
            path: path.to_owned(),
            source,
        })?;

        let list = Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )?;

        debug!(words = list.len(), "loaded words file");
        Ok(list)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, Error> {
        match config.words_file {
            Some(ref path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words
            .choose(rng)
            .expect("words list should not be empty")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|candidate| candidate == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl Default for WordsList {
    fn default() -> Self {
        Self::builtin()
    }
}
