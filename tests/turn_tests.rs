//! Turn rotation tests.
//!
//! Regular questions pass the turn on, bonus questions keep it, and undo
//! hands the turn back exactly as it was.

use party_deck::{DeckConfig, GameSession, Question, QuestionDeck};

fn deck_with(pool: Vec<Question>, players: &[&str]) -> QuestionDeck {
    let mut deck = QuestionDeck::new(DeckConfig::default().with_seed(17).with_guarantee_bonus(false));
    deck.set_players(players.iter().copied());
    deck.load_questions(pool);
    deck
}

fn plain(n: usize) -> Vec<Question> {
    (0..n).map(|i| Question::new(format!("q{i}"))).collect()
}

#[test]
fn test_three_players_rotate_in_order() {
    let mut deck = deck_with(plain(4), &["A", "B", "C"]);

    let mut order = vec![deck.current_player_name().unwrap().to_string()];
    for _ in 0..3 {
        deck.advance();
        order.push(deck.current_player_name().unwrap().to_string());
    }
    assert_eq!(order, vec!["A", "B", "C", "A"]);
}

#[test]
fn test_bonus_questions_keep_the_turn() {
    let pool: Vec<Question> = (0..6).map(|i| Question::bonus(format!("b{i}"))).collect();
    let mut deck = deck_with(pool, &["A", "B", "C"]);

    for _ in 0..5 {
        deck.advance();
        assert_eq!(deck.current_player_index(), 0);
    }
    for _ in 0..5 {
        deck.retreat();
        assert_eq!(deck.current_player_index(), 0);
    }
}

#[test]
fn test_mixed_pool_round_trip() {
    let mut pool = plain(6);
    pool[1].is_bonus = true;
    pool[4].is_bonus = true;
    let mut deck = deck_with(pool, &["A", "B", "C", "D"]);

    for _ in 0..5 {
        let before = deck.snapshot();
        deck.advance();
        let turn_moved = deck.current_player_index() != before.current_player_index;
        assert_eq!(turn_moved, !deck.current().unwrap().is_bonus);

        deck.retreat();
        assert_eq!(deck.snapshot(), before);
        deck.advance();
    }
}

#[test]
fn test_no_players_pins_index() {
    let mut deck = deck_with(plain(5), &[]);
    for _ in 0..6 {
        deck.advance();
        assert_eq!(deck.current_player_index(), 0);
        assert_eq!(deck.current_player_name(), None);
    }
    for _ in 0..6 {
        deck.retreat();
        assert_eq!(deck.current_player_index(), 0);
    }
}

#[test]
fn test_set_players_resets_turn() {
    let mut deck = deck_with(plain(5), &["A", "B", "C"]);
    deck.advance();
    deck.advance();
    assert_eq!(deck.current_player_index(), 2);

    deck.set_players(["X", "Y"]);
    assert_eq!(deck.current_player_index(), 0);
    assert_eq!(deck.current_player_name(), Some("X"));
}

#[test]
fn test_duplicate_names_tracked_by_seat() {
    let mut deck = deck_with(plain(3), &["Sam", "Sam"]);
    deck.advance();
    assert_eq!(deck.current_player_index(), 1);
    assert_eq!(deck.current_player_name(), Some("Sam"));
}

#[test]
fn test_session_filters_blank_names() {
    let mut session = GameSession::new(DeckConfig::default().with_seed(4));
    session.set_players(["A", "   ", "B"]);
    session.load(["x", "y", "z"]);

    assert_eq!(session.snapshot().players.len(), 2);
    assert_eq!(session.snapshot().current_player_name(), Some("A"));
}
