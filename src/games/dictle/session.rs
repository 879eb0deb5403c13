use tokio::sync::broadcast;
use tracing::{debug, info, trace};

use super::{
    core::{is_match, FeedbackColor, GameStatus, GuessOutcome, LookupState, MaskStyle},
    Celebration, SessionEvent,
};

/// State of one game: the hidden word, what the player has seen, and how
/// they're doing.
///
/// Nothing here touches the network; `GameHandle` runs the lookup and hands
/// the result to [`Session::load_definitions`] or [`Session::fail_lookup`].
#[derive(Debug)]
pub struct Session {
    target_word: String,
    definitions: Vec<String>,
    word_display: String,
    user_guess: String,
    feedback: Option<String>,
    feedback_color: FeedbackColor,
    fail_count: u32,
    status: GameStatus,
    lookup: LookupState,
    events: broadcast::Sender<SessionEvent>,
}

impl Session {
    pub const SUCCESS_MESSAGE: &'static str = "Congratulations! You guessed the word!";
    pub const FAILURE_MESSAGE: &'static str = "Wrong guess. Try again!";

    const EVENT_CAPACITY: usize = 16;

    pub fn new(target_word: impl Into<String>, mask: MaskStyle) -> Self {
        let target_word = target_word.into();
        let word_display = mask.mask(&target_word);
        let (events, _) = broadcast::channel(Self::EVENT_CAPACITY);

        Self {
            target_word,
            definitions: Vec::new(),
            word_display,
            user_guess: String::new(),
            feedback: None,
            feedback_color: FeedbackColor::default(),
            fail_count: 0,
            status: GameStatus::default(),
            lookup: LookupState::default(),
            events,
        }
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    pub fn word_display(&self) -> &str {
        &self.word_display
    }

    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub const fn feedback_color(&self) -> FeedbackColor {
        self.feedback_color
    }

    pub const fn fail_count(&self) -> u32 {
        self.fail_count
    }

    pub const fn status(&self) -> GameStatus {
        self.status
    }

    pub fn lookup(&self) -> &LookupState {
        &self.lookup
    }

    /// True until at least one definition has arrived, including when the
    /// lookup failed or found nothing.
    pub fn is_loading(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(super) fn event_sender(&self) -> broadcast::Sender<SessionEvent> {
        self.events.clone()
    }

    pub fn set_user_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    /// Evaluates whatever is in the input buffer, then clears it.
    ///
    /// Once the word is guessed further guesses change nothing and don't
    /// celebrate again.
    pub fn check_guess(&mut self) -> GuessOutcome {
        let guess = std::mem::take(&mut self.user_guess);

        if self.status.is_won() {
            trace!("guess after win ignored");
            return GuessOutcome::AlreadyWon;
        }

        if is_match(&self.target_word, &guess) {
            self.feedback = Some(Self::SUCCESS_MESSAGE.to_owned());
            self.feedback_color = FeedbackColor::Success;
            self.status = GameStatus::Won;

            info!(fail_count = self.fail_count, "word guessed");
            self.emit(SessionEvent::Won(Celebration::default()));

            GuessOutcome::Correct
        } else {
            self.feedback = Some(Self::FAILURE_MESSAGE.to_owned());
            self.feedback_color = FeedbackColor::Failure;
            self.fail_count = self.fail_count.saturating_add(1);

            debug!(fail_count = self.fail_count, "wrong guess");

            GuessOutcome::Wrong
        }
    }

    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        self.set_user_guess(guess);
        self.check_guess()
    }

    /// Stores the lookup result. Only the first result counts.
    pub fn load_definitions(&mut self, definitions: Vec<String>) {
        if !self.lookup.is_pending() {
            debug!(lookup = ?self.lookup, "lookup already settled, dropping definitions");
            return;
        }

        let count = definitions.len();
        self.definitions = definitions;
        self.lookup = LookupState::Loaded;

        debug!(count, "definitions loaded");
        self.emit(SessionEvent::DefinitionsLoaded { count });
    }

    pub fn fail_lookup(&mut self, message: impl Into<String>) {
        if !self.lookup.is_pending() {
            return;
        }

        let message = message.into();
        self.lookup = LookupState::Failed(message.clone());
        self.emit(SessionEvent::LookupFailed { message });
    }

    fn emit(&self, event: SessionEvent) {
        // no subscribers is fine
        if self.events.send(event).is_err() {
            trace!("no one listening for session events");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::broadcast::error::TryRecvError;
    use tracing_test::traced_test;

    use super::Session;
    use crate::games::dictle::{
        Celebration, FeedbackColor, GameStatus, GuessOutcome, LookupState, MaskStyle,
        SessionEvent,
    };

    fn chair() -> Session {
        Session::new("chair", MaskStyle::Spaced)
    }

    #[test]
    fn starts_fresh() {
        let session = chair();

        assert_eq!(session.target_word(), "chair");
        assert_eq!(session.word_display(), "_ _ _ _ _ ");
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.feedback(), None);
        assert_eq!(session.feedback_color(), FeedbackColor::Failure);
        assert_eq!(session.fail_count(), 0);
        assert_eq!(session.user_guess(), "");
        assert_eq!(session.lookup(), &LookupState::Pending);
        assert!(session.is_loading());
    }

    #[test]
    fn compact_mask() {
        let session = Session::new("gain", MaskStyle::Compact);
        assert_eq!(session.word_display(), "____");
    }

    #[test]
    #[traced_test]
    fn padded_guess_wins() {
        let mut session = chair();

        assert_eq!(session.submit_guess("  Chair "), GuessOutcome::Correct);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.feedback_color(), FeedbackColor::Success);
        assert_eq!(session.feedback(), Some(Session::SUCCESS_MESSAGE));
        assert_eq!(session.user_guess(), "");
        assert_eq!(session.fail_count(), 0);
    }

    #[test]
    #[traced_test]
    fn wrong_guesses_count_up() {
        let mut session = chair();

        for expected in 1..=5 {
            assert_eq!(session.submit_guess("table"), GuessOutcome::Wrong);
            assert_eq!(session.fail_count(), expected);
            assert_eq!(session.status(), GameStatus::Playing);
            assert_eq!(session.user_guess(), "");
            assert_eq!(session.feedback(), Some(Session::FAILURE_MESSAGE));
            assert_eq!(session.feedback_color(), FeedbackColor::Failure);
        }
    }

    #[test]
    fn empty_guess_is_wrong() {
        let mut session = chair();

        assert_eq!(session.submit_guess(""), GuessOutcome::Wrong);
        assert_eq!(session.fail_count(), 1);
    }

    #[test]
    fn wrong_then_right_flips_color() {
        let mut session = chair();

        session.submit_guess("stool");
        session.submit_guess("CHAIR");

        assert_eq!(session.fail_count(), 1);
        assert_eq!(session.feedback_color(), FeedbackColor::Success);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn buffer_then_check() {
        let mut session = chair();

        session.set_user_guess("cha");
        assert_eq!(session.user_guess(), "cha");

        session.set_user_guess("chair");
        assert_eq!(session.check_guess(), GuessOutcome::Correct);
        assert_eq!(session.user_guess(), "");
    }

    #[test]
    fn win_celebrates_once() {
        let mut session = chair();
        let mut events = session.subscribe();

        session.submit_guess("chair");
        assert_eq!(events.try_recv(), Ok(SessionEvent::Won(Celebration::default())));

        assert_eq!(session.submit_guess("chair"), GuessOutcome::AlreadyWon);
        assert_eq!(session.submit_guess("wrong"), GuessOutcome::AlreadyWon);
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.fail_count(), 0);
        assert_eq!(session.feedback(), Some(Session::SUCCESS_MESSAGE));
        assert_eq!(session.user_guess(), "");
    }

    #[test]
    fn wrong_guess_emits_nothing() {
        let mut session = chair();
        let mut events = session.subscribe();

        session.submit_guess("stool");
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn loading_tracks_definitions() {
        let mut session = Session::new("gain", MaskStyle::Spaced);
        let mut events = session.subscribe();
        assert!(session.is_loading());

        session.load_definitions(vec!["to increase".to_owned(), "to obtain".to_owned()]);

        assert!(!session.is_loading());
        assert_eq!(session.definitions(), ["to increase", "to obtain"]);
        assert_eq!(session.lookup(), &LookupState::Loaded);
        assert_eq!(
            events.try_recv(),
            Ok(SessionEvent::DefinitionsLoaded { count: 2 })
        );
    }

    #[test]
    fn nothing_found_keeps_loading() {
        let mut session = chair();

        session.load_definitions(Vec::new());

        assert!(session.is_loading());
        assert_eq!(session.lookup(), &LookupState::Loaded);
        assert_eq!(session.submit_guess("chair"), GuessOutcome::Correct);
    }

    #[test]
    fn definitions_load_once() {
        let mut session = chair();

        session.load_definitions(vec!["a seat".to_owned()]);
        session.load_definitions(vec!["replaced".to_owned()]);
        session.fail_lookup("late failure");

        assert_eq!(session.definitions(), ["a seat"]);
        assert_eq!(session.lookup(), &LookupState::Loaded);
    }

    #[test]
    fn failed_lookup_is_reported() {
        let mut session = chair();
        let mut events = session.subscribe();

        session.fail_lookup("dictionary api responded with 500");

        assert!(session.is_loading());
        assert!(session.lookup().is_failed());
        assert_eq!(
            events.try_recv(),
            Ok(SessionEvent::LookupFailed {
                message: "dictionary api responded with 500".to_owned()
            })
        );

        session.submit_guess("chairs");
        assert_eq!(session.fail_count(), 1);
    }

    #[test]
    fn mask_ignores_guesses() {
        let mut session = chair();
        let before = session.word_display().to_owned();

        session.submit_guess("c");
        session.submit_guess("chair");

        assert_eq!(session.word_display(), before);
    }
}
