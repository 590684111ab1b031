//! One-shot background read of the question resource.

use std::path::Path;
use std::thread::{self, JoinHandle};

use crate::core::DeckError;
use crate::deck::QuestionSource;

/// A question resource being read on a worker thread.
///
/// The thread only reads and decodes; the deck is untouched until the
/// result is applied, e.g. by `GameSession::finish_load`.
#[derive(Debug)]
pub struct PendingLoad {
    handle: JoinHandle<Result<Vec<String>, DeckError>>,
}

impl PendingLoad {
    /// Start reading `path`.
    pub fn spawn(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let handle = thread::spawn(move || {
            QuestionSource::from_path(&path).map(QuestionSource::into_questions)
        });
        Self { handle }
    }

    /// Whether the read has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the read completes.
    pub fn wait(self) -> Result<Vec<String>, DeckError> {
        self.handle.join().unwrap_or(Err(DeckError::LoadInterrupted))
    }
}
