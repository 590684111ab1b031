//! Observable deck state handed to the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::question::Question;

/// Point-in-time view of a `QuestionDeck`.
///
/// Cheap to clone: the player list is a persistent vector shared with the
/// deck that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    /// Question on screen, if any.
    pub current: Option<Question>,

    /// True until the question source has been applied.
    pub is_loading: bool,

    /// True once the deck is exhausted or failed to load.
    pub is_game_over: bool,

    /// Questions not yet shown.
    pub questions_available: usize,

    /// Whether `retreat()` would do anything.
    pub can_go_back: bool,

    /// Player names in turn order.
    pub players: Vector<String>,

    /// Active seat. 0 when there are no players.
    pub current_player_index: usize,
}

impl DeckSnapshot {
    /// Name of the player whose turn it is.
    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        self.players.get(self.current_player_index).map(String::as_str)
    }

    /// Whether the question on screen keeps the turn with the same player.
    #[must_use]
    pub fn is_bonus_turn(&self) -> bool {
        self.current.as_ref().is_some_and(|q| q.is_bonus)
    }
}

impl Default for DeckSnapshot {
    fn default() -> Self {
        Self {
            current: None,
            is_loading: true,
            is_game_over: false,
            questions_available: 0,
            can_go_back: false,
            players: Vector::new(),
            current_player_index: 0,
        }
    }
}
