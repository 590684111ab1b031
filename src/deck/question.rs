//! Question values.

use serde::{Deserialize, Serialize};

/// A question prompt. Immutable once the pool is built.
///
/// Answering a bonus question keeps the turn with the same player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub is_bonus: bool,
}

impl Question {
    /// A regular question that passes the turn on.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bonus: false,
        }
    }

    /// A bonus question.
    pub fn bonus(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bonus: true,
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_bonus {
            write!(f, "[bonus] {}", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}
