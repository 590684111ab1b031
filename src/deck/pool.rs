//! Building the fixed question pool from raw prompts.

use crate::core::{DeckConfig, DeckError, DeckRng};

use super::question::Question;

/// Turn raw prompts into questions, flagging bonus questions at random.
///
/// Each prompt becomes a bonus question independently with
/// `config.bonus_probability`. With `guarantee_bonus` set, a non-empty pool
/// that drew no bonus gets one forced, picked uniformly at random.
pub fn build_pool<I, S>(
    texts: I,
    config: &DeckConfig,
    rng: &mut DeckRng,
) -> Result<Vec<Question>, DeckError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    config.validate()?;

    let mut pool: Vec<Question> = texts
        .into_iter()
        .map(|text| Question {
            text: text.into(),
            is_bonus: rng.gen_bool(config.bonus_probability),
        })
        .collect();

    if config.guarantee_bonus {
        force_bonus(&mut pool, rng);
    }

    Ok(pool)
}

/// Flag one random question as bonus if a non-empty pool has none.
pub(crate) fn force_bonus(pool: &mut [Question], rng: &mut DeckRng) {
    if !pool.is_empty() && !pool.iter().any(|q| q.is_bonus) {
        let index = rng.gen_range_usize(0..pool.len());
        pool[index].is_bonus = true;
    }
}
