//! # party-deck
//!
//! Question deck engine for turn-based party card games.
//!
//! A pool of question prompts is shuffled into a deck and shown one at a
//! time while the turn rotates around the table. Some questions are bonus
//! questions: answering one keeps the turn with the same player.
//!
//! ## Design Principles
//!
//! 1. **No invalid states**: Operations past either end of the deck are
//!    no-ops or terminal transitions. Nothing panics, nothing returns errors.
//!
//! 2. **Reproducible**: All randomness goes through a seeded `DeckRng`.
//!
//! 3. **Single writer**: A `GameSession` owns its deck and publishes a
//!    `DeckSnapshot` after every change.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, player rotation, errors
//! - `deck`: Questions, question source, pool building, the deck itself
//! - `session`: Change notification and background loading
//! - `settings`: Persisted boolean preferences (haptic feedback)

pub mod core;
pub mod deck;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use crate::core::{
    sanitize_player_names, DeckConfig, DeckError, DeckRng, DeckRngState, PlayerOrder,
};

pub use crate::deck::{
    build_pool, DeckSnapshot, Question, QuestionDeck, QuestionSource, DEFAULT_QUESTION_ASSET,
};

pub use crate::session::{GameSession, ListenerId, PendingLoad, SnapshotListener};

pub use crate::settings::{Settings, SettingsStore, HAPTICS_ENABLED_KEY};
