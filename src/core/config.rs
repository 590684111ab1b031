//! Deck configuration.
//!
//! A `DeckConfig` controls how a pool is built from raw question text:
//! - how likely each question is to become a bonus question
//! - whether at least one bonus question is forced into a non-empty pool
//! - which seed drives pool building and shuffling

use serde::{Deserialize, Serialize};

use super::error::DeckError;

/// Chance that any single question is flagged as a bonus question (1 in 10).
pub const DEFAULT_BONUS_PROBABILITY: f64 = 0.1;

/// Configuration for building and shuffling a question deck.
///
/// ```
/// use party_deck::core::DeckConfig;
///
/// let config = DeckConfig::default().with_seed(42).with_bonus_probability(0.25);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Independent per-question probability of being a bonus question.
    pub bonus_probability: f64,

    /// Force one random question to be a bonus if none were drawn.
    pub guarantee_bonus: bool,

    /// RNG seed. `None` draws a seed from entropy.
    pub seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            bonus_probability: DEFAULT_BONUS_PROBABILITY,
            guarantee_bonus: true,
            seed: None,
        }
    }
}

impl DeckConfig {
    /// Set the per-question bonus probability.
    #[must_use]
    pub fn with_bonus_probability(mut self, probability: f64) -> Self {
        self.bonus_probability = probability;
        self
    }

    /// Enable or disable the forced-bonus rule.
    #[must_use]
    pub fn with_guarantee_bonus(mut self, guarantee: bool) -> Self {
        self.guarantee_bonus = guarantee;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), DeckError> {
        if !(0.0..=1.0).contains(&self.bonus_probability) {
            return Err(DeckError::InvalidConfig(format!(
                "bonus probability {} outside [0, 1]",
                self.bonus_probability
            )));
        }
        Ok(())
    }
}
