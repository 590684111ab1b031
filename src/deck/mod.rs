//! Questions, the question source, and the deck state machine.
//!
//! - `Question`: prompt text plus the bonus flag
//! - `QuestionSource`: the `{ "questions": [...] }` resource
//! - `build_pool`: random bonus assignment with the forced-bonus rule
//! - `QuestionDeck`: shuffle, draw, undo, and player rotation
//! - `DeckSnapshot`: what the presentation layer renders

pub mod pool;
pub mod question;
pub mod question_deck;
pub mod snapshot;
pub mod source;

pub use pool::build_pool;
pub use question::Question;
pub use question_deck::QuestionDeck;
pub use snapshot::DeckSnapshot;
pub use source::{QuestionSource, DEFAULT_QUESTION_ASSET};
