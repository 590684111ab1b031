//! Game sessions: a deck plus change notification.
//!
//! `GameSession` is the single writer of its deck. Every operation is applied
//! to the deck, a fresh `DeckSnapshot` is taken, and if it differs from the
//! last one the revision counter is bumped and subscribers are called.
//! Presentation code can either subscribe or poll `revision()`.
//!
//! Loading is the only step that may happen off the caller's thread:
//! `PendingLoad` reads and decodes the question resource on a worker thread,
//! and `GameSession::finish_load` applies the result in one step.

mod loader;

pub use loader::PendingLoad;

use std::path::Path;

use crate::core::{sanitize_player_names, DeckConfig, DeckError};
use crate::deck::{DeckSnapshot, QuestionDeck};

/// Receives a snapshot after every state change.
pub trait SnapshotListener {
    fn on_snapshot(&mut self, snapshot: &DeckSnapshot);
}

impl<F> SnapshotListener for F
where
    F: FnMut(&DeckSnapshot),
{
    fn on_snapshot(&mut self, snapshot: &DeckSnapshot) {
        self(snapshot)
    }
}

/// Handle returned by `GameSession::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Session-scoped owner of a `QuestionDeck`.
pub struct GameSession {
    deck: QuestionDeck,
    snapshot: DeckSnapshot,
    pending: Option<PendingLoad>,
    revision: u64,
    next_listener: u64,
    listeners: Vec<(ListenerId, Box<dyn SnapshotListener>)>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DeckConfig::default())
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("deck", &self.deck)
            .field("pending", &self.pending.is_some())
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GameSession {
    pub fn new(config: DeckConfig) -> Self {
        Self::from_deck(QuestionDeck::new(config))
    }

    /// Wrap an existing deck.
    pub fn from_deck(deck: QuestionDeck) -> Self {
        let snapshot = deck.snapshot();
        Self {
            deck,
            snapshot,
            pending: None,
            revision: 0,
            next_listener: 0,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &QuestionDeck {
        &self.deck
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &DeckSnapshot {
        &self.snapshot
    }

    /// Number of published changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener. It is not called until the next change.
    pub fn subscribe(&mut self, listener: impl SnapshotListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    // === Loading ===

    pub fn load<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deck.load(texts);
        self.publish();
    }

    pub fn load_source(&mut self, source: Result<Vec<String>, DeckError>) {
        self.deck.load_source(source);
        self.publish();
    }

    pub fn load_json(&mut self, json: &str) {
        self.deck.load_json(json);
        self.publish();
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) {
        self.deck.load_path(path);
        self.publish();
    }

    /// Start reading the question resource on a worker thread.
    ///
    /// Replaces any read this session already has in flight; the older
    /// result is discarded.
    pub fn begin_load(&mut self, path: impl AsRef<Path>) {
        if self.pending.replace(PendingLoad::spawn(path)).is_some() {
            log::debug!("discarding superseded question load");
        }
    }

    /// Whether a background read started by `begin_load` is still unapplied.
    #[must_use]
    pub fn is_load_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for this session's background read and apply its result.
    ///
    /// Returns false if no read was in flight.
    pub fn finish_load(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.load_source(pending.wait());
        true
    }

    // === Operations ===

    pub fn restart(&mut self) {
        self.deck.restart();
        self.publish();
    }

    pub fn advance(&mut self) {
        self.deck.advance();
        self.publish();
    }

    pub fn retreat(&mut self) {
        self.deck.retreat();
        self.publish();
    }

    /// Set the player order from setup input, dropping blank names.
    pub fn set_players<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deck.set_players(sanitize_player_names(names));
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = self.deck.snapshot();
        if snapshot == self.snapshot {
            return;
        }
        self.snapshot = snapshot;
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener.on_snapshot(&self.snapshot);
        }
    }
}
