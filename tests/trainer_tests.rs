//! Coordinate trainer integration tests.

use chess_drills::{ClickFeedback, Coord, SessionState, TrainerSession};

fn wrong_square(session: &TrainerSession) -> Coord {
    let t = session.target();
    if t.row == 0 {
        Coord::new(1, t.col)
    } else {
        Coord::new(0, t.col)
    }
}

// =============================================================================
// Timed Session Flow
// =============================================================================

#[test]
fn test_timed_session_lifecycle() {
    let mut session = TrainerSession::new(8, 5, 42);

    session.start();
    assert!(session.running());

    // Two hits, one miss
    let t = session.target();
    session.click(t);
    let t = session.target();
    session.click(t);
    session.click(wrong_square(&session));

    assert_eq!(session.score(), 2);
    assert_eq!(session.attempts(), 3);
    assert_eq!(session.accuracy(), 67);

    // Run the clock out
    for _ in 0..5 {
        session.tick();
    }
    assert!(!session.running());
    assert_eq!(session.time_remaining(), 0);

    // Score survives the stop
    assert_eq!(session.score(), 2);
}

#[test]
fn test_restarting_a_finished_session() {
    let mut session = TrainerSession::new(8, 2, 42);
    session.start();
    session.click(session.target());
    session.tick();
    session.tick();
    assert!(!session.running());

    session.start();

    assert!(session.running());
    assert_eq!(session.score(), 0);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.time_remaining(), 2);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_session() {
    let mut s1 = TrainerSession::new(8, 60, 123);
    let mut s2 = TrainerSession::new(8, 60, 123);

    s1.start();
    s2.start();

    for _ in 0..30 {
        assert_eq!(s1.target(), s2.target());
        assert_eq!(s1.target_name(), s2.target_name());
        let t = s1.target();
        s1.click(t);
        s2.click(t);
    }

    assert_eq!(s1.score(), 30);
    assert_eq!(s2.score(), 30);
}

#[test]
fn test_targets_cover_small_board() {
    // On a 2x2 board a long session should hit every square as a target
    let mut session = TrainerSession::new(2, 60, 42);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..200 {
        seen.insert(session.target());
        let t = session.target();
        session.click(t);
    }

    assert_eq!(seen.len(), 4);
}

// =============================================================================
// Snapshot / Restore
// =============================================================================

#[test]
fn test_session_snapshot_roundtrip() {
    let mut session = TrainerSession::new(8, 60, 99);
    session.start();
    session.click(session.target());
    session.click(wrong_square(&session));
    session.tick();
    session.tick();

    let json = serde_json::to_string(&session.state()).unwrap();
    let state: SessionState = serde_json::from_str(&json).unwrap();
    let mut restored = TrainerSession::from_state(&state);

    assert_eq!(restored.score(), 1);
    assert_eq!(restored.attempts(), 2);
    assert_eq!(restored.time_remaining(), 58);
    assert!(restored.running());
    assert_eq!(restored.target(), session.target());
    assert_eq!(restored.last_click(), session.last_click());

    // Both sessions keep drawing the same targets after the round trip
    for _ in 0..15 {
        let t = session.target();
        assert_eq!(restored.target(), t);
        session.click(t);
        restored.click(t);
    }
    assert_eq!(restored.score(), session.score());
}

#[test]
fn test_click_feedback_serde() {
    let fb = ClickFeedback {
        coord: Coord::new(3, 5),
        correct: true,
    };

    let json = serde_json::to_string(&fb).unwrap();
    let back: ClickFeedback = serde_json::from_str(&json).unwrap();
    assert_eq!(fb, back);
}

// =============================================================================
// Feedback
// =============================================================================

#[test]
fn test_feedback_records_each_click() {
    let mut session = TrainerSession::new(8, 60, 42);

    let wrong = wrong_square(&session);
    session.click(wrong);
    let fb = session.last_click().unwrap();
    assert_eq!(fb.coord, wrong);
    assert!(!fb.correct);

    let t = session.target();
    session.click(t);
    let fb = session.last_click().unwrap();
    assert_eq!(fb.coord, t);
    assert!(fb.correct);

    session.clear_feedback();
    assert!(session.last_click().is_none());
}
