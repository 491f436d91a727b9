//! Property-based tests for the drill session state machine.
//!
//! Generates random key-input sequences via proptest and verifies that
//! structural invariants hold after every action.

use proptest::prelude::*;

use super::make_test_queue;
use crate::types::{KeyEvent, KeyOutcome, SessionConfig};
use crate::{DrillSession, KeyResponse};

// ---------------------------------------------------------------------------
// Action enum: models every user-facing operation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    TypeLetter(char),
    Backspace,
    Skip,
    Tick,
    ClearMark,
    CorrectValid(&'static str),
    CorrectInvalid(&'static str),
    Reset,
}

// ---------------------------------------------------------------------------
// Strategy: weighted random Action generation
// ---------------------------------------------------------------------------

fn arb_letter() -> impl Strategy<Value = char> {
    // Letters that actually occur in the test queue's codes at higher
    // weight, so runs advance instead of erroring forever.
    prop_oneof![
        3 => prop::sample::select(vec!['v', 's', 'g', 'o', 'a', 'd', 'y', 'u', 'i']),
        1 => prop::sample::select(('a'..='z').collect::<Vec<char>>()),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        50 => arb_letter().prop_map(Action::TypeLetter),
        8 => Just(Action::Backspace),
        5 => Just(Action::Skip),
        5 => Just(Action::Tick),
        3 => Just(Action::ClearMark),
        3 => prop::sample::select(vec!["chong", "zhong", "ma", "xu"])
            .prop_map(Action::CorrectValid),
        2 => prop::sample::select(vec!["zh", "zzz", "a1b", ""])
            .prop_map(Action::CorrectInvalid),
        2 => Just(Action::Reset),
    ]
}

// ---------------------------------------------------------------------------
// Execute an Action against the session
// ---------------------------------------------------------------------------

fn execute_action(session: &mut DrillSession, action: &Action) -> Option<KeyResponse> {
    match action {
        Action::TypeLetter(ch) => Some(session.handle_key(KeyEvent::Letter(*ch))),
        Action::Backspace => Some(session.handle_key(KeyEvent::Backspace)),
        Action::Skip => Some(session.handle_key(KeyEvent::Skip)),
        Action::Tick => {
            session.tick();
            None
        }
        Action::ClearMark => {
            session.clear_error_mark();
            None
        }
        Action::CorrectValid(s) => {
            session
                .correct_current(s)
                .expect("known-good syllable must be accepted");
            None
        }
        Action::CorrectInvalid(s) => {
            if session.current_entry().is_some() {
                session
                    .correct_current(s)
                    .expect_err("malformed syllable must be rejected");
            }
            None
        }
        Action::Reset => {
            session.reset_current();
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant checks, run after every action
// ---------------------------------------------------------------------------

fn assert_invariants(session: &DrillSession, resp: Option<&KeyResponse>, action: &Action) {
    // 1. The buffer never holds more than one pending symbol.
    assert!(
        session.buffer().len() <= 1,
        "buffer {:?} too long after {:?}",
        session.buffer(),
        action,
    );

    // 2. The queue position never leaves the queue.
    assert!(
        session.current_index() <= session.queue().len(),
        "current_index out of bounds after {:?}",
        action,
    );

    // 3. An error mark implies an empty buffer (mistakes reset it).
    if session.error_mark().is_some() {
        assert!(
            session.buffer().is_empty(),
            "error mark with pending buffer after {:?}",
            action,
        );
    }

    // 4. A pending buffer is a strict prefix of the code or the alias.
    //    (Indexing the queue directly: the countdown may have completed the
    //    session with a symbol still buffered.)
    if !session.buffer().is_empty() {
        let entry = &session.queue()[session.current_index()];
        let buffer = session.buffer();
        assert!(
            entry.code.starts_with(buffer) || entry.syllable.starts_with(buffer),
            "buffer {:?} matches neither {:?} nor {:?} after {:?}",
            buffer,
            entry.code,
            entry.syllable,
            action,
        );
    }

    // 5. Every code in the queue stays two lowercase letters, corrections
    //    included.
    for entry in session.queue() {
        assert_eq!(entry.code.len(), 2, "bad code after {:?}", action);
        assert!(entry.code.bytes().all(|b| b.is_ascii_lowercase()));
    }

    let Some(resp) = resp else { return };

    // 6. Unconsumed events carry nothing.
    if !resp.consumed {
        assert_eq!(resp.outcome, KeyOutcome::Ignored);
        assert!(resp.record.is_none());
        assert!(resp.effects.sound.is_none());
    }

    // 7. Records accompany exactly the advancing and erroneous transitions.
    match resp.outcome {
        KeyOutcome::Advance => assert!(resp.record.is_some()),
        KeyOutcome::Mistake { expected_key, .. } => {
            assert!(expected_key.is_ascii_lowercase());
            assert!(resp.record.as_ref().is_some_and(|r| r.was_error));
        }
        KeyOutcome::Pending | KeyOutcome::Ignored => assert!(resp.record.is_none()),
    }
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_invariants_hold(actions in prop::collection::vec(arb_action(), 1..100)) {
        let mut session = DrillSession::new(SessionConfig::default());
        prop_assert!(session.start(make_test_queue()));

        let mut drained = 0u32;
        for action in &actions {
            let resp = execute_action(&mut session, action);
            assert_invariants(&session, resp.as_ref(), action);
            drained += session.take_records().len() as u32;
        }

        // Every tallied event produced exactly one record.
        let stats = session.stats();
        prop_assert_eq!(drained, stats.correct + stats.errors);
    }

    #[test]
    fn timed_session_invariants_hold(actions in prop::collection::vec(arb_action(), 1..100)) {
        let mut session = DrillSession::new(SessionConfig {
            allow_short_full_syllable: false,
            sound_enabled: true,
        });
        prop_assert!(session.start_timed(make_test_queue(), 5));

        let mut prev_left = session.time_left();
        for action in &actions {
            let resp = execute_action(&mut session, action);
            assert_invariants(&session, resp.as_ref(), action);

            // The countdown never moves backwards.
            let left = session.time_left();
            prop_assert!(left <= prev_left, "countdown went up: {:?} -> {:?}", prev_left, left);
            prev_left = left;

            if left == Some(0) {
                prop_assert!(session.is_complete());
            }
        }
    }
}
