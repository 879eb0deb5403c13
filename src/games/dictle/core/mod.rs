mod guess;
pub use guess::{is_match, GuessOutcome};

mod mask;
pub use mask::MaskStyle;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Tint of the latest feedback message.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackColor {
    Success,
    #[default]
    Failure,
}

/// Where the definitions lookup is at.
///
/// Kept apart from `Session::is_loading`, which only says whether any
/// definitions have arrived.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LookupState {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

impl LookupState {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
