//! Guess the word from its dictionary definitions.
//!
//! A [`GameHandle`] picks a word, shows it masked, and looks up its
//! definitions in the background while the player starts guessing.

use std::sync::{Arc, Weak};

use rand::Rng;
use tokio::{
    sync::{broadcast, RwLock, RwLockReadGuard, RwLockWriteGuard},
    task::JoinHandle,
};
use tracing::{debug, instrument, warn};

use crate::{dictionary::DefinitionSource, framework::config::GameConfig};

pub mod core;
pub use self::core::{FeedbackColor, GameStatus, GuessOutcome, LookupState, MaskStyle};

mod error;
pub use error::Error;

mod events;
pub use events::{Celebration, ParticleShape, Rgb, SessionEvent};

mod session;
pub use session::Session;

mod words_list;
pub use words_list::{WordsList, WORDS};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub mask: MaskStyle,
}

impl From<&GameConfig> for GameOptions {
    fn from(config: &GameConfig) -> Self {
        Self { mask: config.mask }
    }
}

/// Owns a running session and its definitions lookup.
///
/// Dropping the handle discards the session and aborts the lookup if it is
/// still in flight.
#[derive(Debug)]
pub struct GameHandle {
    session: Arc<RwLock<Session>>,
    events: broadcast::Sender<SessionEvent>,
    lookup: Option<JoinHandle<()>>,
}

impl GameHandle {
    /// Picks a word at random and starts a game with it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<R: Rng + ?Sized>(
        words: &WordsList,
        rng: &mut R,
        source: Arc<dyn DefinitionSource>,
        options: GameOptions,
    ) -> Self {
        Self::with_target(words.random_answer(rng), source, options)
    }

    pub fn with_target(
        target_word: impl Into<String>,
        source: Arc<dyn DefinitionSource>,
        options: GameOptions,
    ) -> Self {
        let session = Session::new(target_word, options.mask);
        let word = session.target_word().to_owned();
        let events = session.event_sender();
        debug!(letters = word.chars().count(), "game started");

        let session = Arc::new(RwLock::new(session));
        let lookup = tokio::spawn(lookup_definitions(Arc::downgrade(&session), source, word));

        Self {
            session,
            events,
            lookup: Some(lookup),
        }
    }

    pub async fn session(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().await
    }

    pub async fn session_mut(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().await
    }

    pub async fn submit_guess(&self, guess: &str) -> GuessOutcome {
        self.session_mut().await.submit_guess(guess)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Waits for the definitions lookup to settle, successfully or not.
    pub async fn lookup_finished(&mut self) {
        if let Some(lookup) = self.lookup.take() {
            if let Err(err) = lookup.await {
                warn!(%err, "definitions lookup task did not complete");
            }
        }
    }
}

impl Drop for GameHandle {
    fn drop(&mut self) {
        if let Some(lookup) = self.lookup.take() {
            lookup.abort();
        }
    }
}

#[instrument(skip_all)]
async fn lookup_definitions(
    session: Weak<RwLock<Session>>,
    source: Arc<dyn DefinitionSource>,
    word: String,
) {
    let result = source.fetch_definitions(&word).await;

    let Some(session) = session.upgrade() else {
        debug!("session discarded before lookup finished");
        return;
    };

    let mut session = session.write().await;
    match result {
        Ok(definitions) => session.load_definitions(definitions),
        Err(err) => {
            warn!(%err, "definitions lookup failed");
            session.fail_lookup(err.to_string());
        }
    }
}
