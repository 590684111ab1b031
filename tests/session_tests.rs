//! Session tests: background loading, notification, and settings.

use std::cell::RefCell;
use std::rc::Rc;

use party_deck::{DeckConfig, DeckSnapshot, GameSession, SettingsStore};

#[test]
fn test_background_load_applies_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(&path, r#"{"questions": ["a", "b", "c", "d", "e"]}"#).unwrap();

    let mut session = GameSession::new(DeckConfig::default().with_seed(11));
    let published = Rc::new(RefCell::new(Vec::<DeckSnapshot>::new()));
    let sink = Rc::clone(&published);
    session.subscribe(move |s: &DeckSnapshot| sink.borrow_mut().push(s.clone()));

    assert!(session.snapshot().is_loading);
    session.begin_load(&path);
    assert!(session.is_load_pending());
    assert!(session.finish_load());
    assert!(!session.is_load_pending());
    assert!(!session.finish_load());

    let published = published.borrow();
    assert_eq!(published.len(), 1);
    assert!(!published[0].is_loading);
    assert_eq!(published[0].questions_available, 4);
    assert!(published[0].current.is_some());
}

#[test]
fn test_background_load_failure_ends_game() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = GameSession::new(DeckConfig::default().with_seed(11));

    session.begin_load(dir.path().join("missing.json"));
    assert!(session.finish_load());

    let snapshot = session.snapshot();
    assert!(!snapshot.is_loading);
    assert!(snapshot.is_game_over);
    assert!(snapshot.current.is_none());
}

/// A newer `begin_load` supersedes the older one.
#[test]
fn test_background_load_latest_wins() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("questions.json");
    std::fs::write(&good, r#"{"questions": ["a", "b", "c"]}"#).unwrap();

    let mut session = GameSession::new(DeckConfig::default().with_seed(11));
    session.begin_load(dir.path().join("missing.json"));
    session.begin_load(&good);
    assert!(session.finish_load());

    assert!(!session.snapshot().is_game_over);
    assert_eq!(session.snapshot().questions_available, 2);
    assert!(!session.finish_load());
}

#[test]
fn test_revision_tracks_changes() {
    let mut session = GameSession::new(DeckConfig::default().with_seed(2));
    assert_eq!(session.revision(), 0);

    session.load(["a", "b"]);
    assert_eq!(session.revision(), 1);
    session.advance();
    assert_eq!(session.revision(), 2);
    session.advance();
    assert!(session.snapshot().is_game_over);
    assert_eq!(session.revision(), 3);
    session.advance();
    assert_eq!(session.revision(), 3);

    session.retreat();
    assert!(!session.snapshot().is_game_over);
    assert_eq!(session.revision(), 4);
}

#[test]
fn test_settings_toggle_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = SettingsStore::open(&path).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |s| sink.borrow_mut().push(s.haptics_enabled));

    store.set_haptics_enabled(false).unwrap();
    store.set_haptics_enabled(true).unwrap();
    store.set_haptics_enabled(true).unwrap();

    assert_eq!(*seen.borrow(), vec![false, true]);
    assert!(SettingsStore::open(&path).unwrap().haptics_enabled());
}
