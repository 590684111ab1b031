//! Core building blocks: RNG, configuration, players, errors.
//!
//! Nothing here knows about questions. The `deck` module combines these
//! pieces into the question-deck state machine.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{DeckConfig, DEFAULT_BONUS_PROBABILITY};
pub use error::DeckError;
pub use player::{sanitize_player_names, PlayerOrder};
pub use rng::{DeckRng, DeckRngState};
