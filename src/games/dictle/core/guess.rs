#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// The word was already guessed; nothing changed.
    AlreadyWon,
}

impl GuessOutcome {
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Case-insensitive match, ignoring whitespace around the guess.
pub fn is_match(target: &str, guess: &str) -> bool {
    guess.trim().to_lowercase() == target.to_lowercase()
}
