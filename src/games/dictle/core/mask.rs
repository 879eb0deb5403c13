use serde::{Deserialize, Serialize};

/// How the hidden word is drawn: one token per letter either way.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MaskStyle {
    /// `_ ` per letter, trailing space included.
    #[default]
    Spaced,
    /// `_` per letter.
    Compact,
}

impl MaskStyle {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Spaced => "_ ",
            Self::Compact => "_",
        }
    }

    pub fn mask(self, word: &str) -> String {
        self.token().repeat(word.chars().count())
    }
}
