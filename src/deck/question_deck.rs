//! The question deck state machine.
//!
//! ## Partition
//!
//! After load, every pool question is in exactly one place:
//! - `available`: not yet shown, drawn from the front
//! - `current`: on screen
//! - `used`: already shown, popped from the back on undo
//!
//! At the terminal transition the last question is pushed onto `used` but
//! stays on screen, so while game-over `current` is not counted separately.
//!
//! ## Turns
//!
//! Showing a regular question passes the turn to the next player; a bonus
//! question keeps it. `retreat()` undoes exactly what the matching
//! `advance()` did to the turn, so advance-then-retreat is an identity.

use std::path::Path;

use im::Vector;

use crate::core::{DeckConfig, DeckError, DeckRng, DeckRngState, PlayerOrder};

use super::pool::{build_pool, force_bonus};
use super::question::Question;
use super::snapshot::DeckSnapshot;
use super::source::QuestionSource;

/// Shuffled question deck with player rotation and undo.
///
/// ```
/// use party_deck::{DeckConfig, QuestionDeck};
///
/// let mut deck = QuestionDeck::new(DeckConfig::default().with_seed(1));
/// deck.set_players(["Ana", "Ben"]);
/// deck.load(["one", "two", "three"]);
///
/// assert!(deck.current().is_some());
/// assert_eq!(deck.available_len(), 2);
///
/// deck.advance();
/// deck.advance();
/// deck.advance();
/// assert!(deck.is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct QuestionDeck {
    config: DeckConfig,
    rng: DeckRng,
    pool: Vec<Question>,
    available: Vector<Question>,
    used: Vector<Question>,
    current: Option<Question>,
    players: PlayerOrder,
    is_loading: bool,
    is_game_over: bool,
}

impl Default for QuestionDeck {
    fn default() -> Self {
        Self::new(DeckConfig::default())
    }
}

impl QuestionDeck {
    /// Create an empty, still-loading deck.
    ///
    /// An invalid config is replaced by the default one (keeping its seed).
    pub fn new(config: DeckConfig) -> Self {
        match Self::try_new(config.clone()) {
            Ok(deck) => deck,
            Err(err) => {
                log::warn!("{err}; falling back to default deck configuration");
                let fallback = DeckConfig {
                    seed: config.seed,
                    ..DeckConfig::default()
                };
                Self::with_valid_config(fallback)
            }
        }
    }

    /// Create an empty, still-loading deck, rejecting an invalid config.
    pub fn try_new(config: DeckConfig) -> Result<Self, DeckError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: DeckConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        };
        Self {
            config,
            rng,
            pool: Vec::new(),
            available: Vector::new(),
            used: Vector::new(),
            current: None,
            players: PlayerOrder::default(),
            is_loading: true,
            is_game_over: false,
        }
    }

    // === Loading ===

    /// Build the pool from raw prompts, flagging bonus questions, then restart.
    pub fn load<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match build_pool(texts, &self.config, &mut self.rng) {
            Ok(pool) => self.load_questions(pool),
            Err(err) => {
                log::warn!("could not build question pool: {err}");
                self.fail_load();
            }
        }
    }

    /// Use prebuilt questions as the pool, then restart.
    ///
    /// Bonus flags are kept, except that a pool without any bonus gets one
    /// forced when `guarantee_bonus` is set.
    pub fn load_questions(&mut self, mut pool: Vec<Question>) {
        if self.config.guarantee_bonus {
            force_bonus(&mut pool, &mut self.rng);
        }
        log::info!(
            "loaded {} questions ({} bonus)",
            pool.len(),
            pool.iter().filter(|q| q.is_bonus).count()
        );
        self.pool = pool;
        self.restart();
    }

    /// Apply the outcome of reading the question source.
    ///
    /// A failed read leaves an empty, finished deck instead of an error.
    pub fn load_source(&mut self, source: Result<Vec<String>, DeckError>) {
        match source {
            Ok(texts) => self.load(texts),
            Err(err) => {
                log::warn!("question source unavailable: {err}");
                self.fail_load();
            }
        }
    }

    /// Decode a JSON question resource and load it.
    pub fn load_json(&mut self, json: &str) {
        self.load_source(QuestionSource::from_json_str(json).map(QuestionSource::into_questions));
    }

    /// Read a JSON question resource from disk and load it.
    pub fn load_path(&mut self, path: impl AsRef<Path>) {
        self.load_source(QuestionSource::from_path(path).map(QuestionSource::into_questions));
    }

    fn fail_load(&mut self) {
        self.pool.clear();
        self.available.clear();
        self.used.clear();
        self.current = None;
        self.is_loading = false;
        self.is_game_over = true;
    }

    // === Operations ===

    /// Reshuffle the whole pool and show its first question.
    pub fn restart(&mut self) {
        let mut order = self.pool.clone();
        self.rng.shuffle(&mut order);

        self.available = order.into_iter().collect();
        self.used.clear();
        self.players.reset();
        self.is_loading = false;

        self.current = self.available.pop_front();
        self.is_game_over = self.current.is_none();
        log::debug!("deck restarted with {} questions", self.pool.len());
    }

    /// Show the next question, or finish the game when none are left.
    ///
    /// No-op while loading or once the game is over.
    pub fn advance(&mut self) {
        if self.is_loading || self.is_game_over {
            return;
        }

        match self.available.pop_front() {
            Some(next) => {
                if let Some(previous) = self.current.take() {
                    self.used.push_back(previous);
                }
                if !next.is_bonus {
                    self.players.advance();
                }
                self.current = Some(next);
            }
            None => {
                if let Some(last) = &self.current {
                    self.used.push_back(last.clone());
                }
                self.is_game_over = true;
                log::debug!("deck exhausted after {} questions", self.used.len());
            }
        }
    }

    /// Go back to the previously shown question.
    ///
    /// No-op when nothing has been shown before the current question.
    pub fn retreat(&mut self) {
        if self.is_loading {
            return;
        }

        if self.is_game_over {
            // The question on screen is also the top of `used`.
            if let Some(last) = self.used.pop_back() {
                self.current = Some(last);
                self.is_game_over = false;
            }
            return;
        }

        let Some(previous) = self.used.pop_back() else {
            return;
        };
        if let Some(withdrawn) = self.current.take() {
            if !withdrawn.is_bonus {
                self.players.retreat();
            }
            self.available.push_front(withdrawn);
        }
        self.current = Some(previous);
    }

    /// Replace the player order and give the turn to the first seat.
    ///
    /// Names are taken as given; blank-name filtering belongs to the caller.
    pub fn set_players<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = PlayerOrder::new(names);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// The full pool in load order.
    #[must_use]
    pub fn pool(&self) -> &[Question] {
        &self.pool
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Questions waiting to be shown, in draw order.
    #[must_use]
    pub fn available(&self) -> &Vector<Question> {
        &self.available
    }

    #[must_use]
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    /// Previously shown questions, oldest first.
    #[must_use]
    pub fn used(&self) -> &Vector<Question> {
        &self.used
    }

    #[must_use]
    pub fn used_len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerOrder {
        &self.players
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.players.current_index()
    }

    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        self.players.current_name()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.is_loading && !self.used.is_empty()
    }

    /// RNG state, for reproducing a session's shuffles.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    /// Current observable state.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            current: self.current.clone(),
            is_loading: self.is_loading,
            is_game_over: self.is_game_over,
            questions_available: self.available.len(),
            can_go_back: self.can_go_back(),
            players: self.players.names().clone(),
            current_player_index: self.players.current_index(),
        }
    }
}
