//! Player rotation.
//!
//! ## PlayerOrder
//!
//! Ordered list of player names plus the index of whose turn it is.
//! Names are tracked by position: duplicates are distinct seats.
//! An empty order means "no named players" and pins the index at 0.
//!
//! Backed by `im::Vector` so snapshots share the list instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Drop blank and whitespace-only names, keeping order and duplicates.
///
/// This is the player-setup boundary policy. `PlayerOrder` itself accepts
/// any names it is given.
///
/// ```
/// use party_deck::core::sanitize_player_names;
///
/// let names = sanitize_player_names(["Ana", "  ", "", "Ben", "Ana"]);
/// assert_eq!(names, vec!["Ana", "Ben", "Ana"]);
/// ```
pub fn sanitize_player_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| !name.trim().is_empty())
        .collect()
}

/// Player names in turn order and the active seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOrder {
    names: Vector<String>,
    current: usize,
}

impl PlayerOrder {
    /// Create an order starting at the first seat.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            current: 0,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in turn order.
    #[must_use]
    pub fn names(&self) -> &Vector<String> {
        &self.names
    }

    /// Index of the active seat. Always 0 when there are no players.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Name of the active seat, if any.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.names.get(self.current).map(String::as_str)
    }

    /// Pass the turn to the next seat, wrapping around.
    pub fn advance(&mut self) {
        self.current = if self.names.is_empty() {
            0
        } else {
            (self.current + 1) % self.names.len()
        };
    }

    /// Hand the turn back to the previous seat, wrapping around.
    pub fn retreat(&mut self) {
        let len = self.names.len();
        self.current = if len == 0 { 0 } else { (self.current + len - 1) % len };
    }

    /// Return the turn to the first seat.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
