mod proptest_fsm;

use crane_core::queue::{build_queue, QueueEntry};

use super::types::{KeyEvent, KeyResponse, SessionConfig};
use super::DrillSession;

pub(super) fn make_test_queue() -> Vec<QueueEntry> {
    let pairs: Vec<(char, String)> = [
        ('中', "zhong"),
        ('国', "guo"),
        ('爱', "ai"),
        ('鱼', "yu"),
    ]
    .iter()
    .map(|(c, s)| (*c, s.to_string()))
    .collect();
    build_queue(&pairs)
}

pub(super) fn make_session() -> DrillSession {
    let mut session = DrillSession::new(SessionConfig::default());
    assert!(session.start(make_test_queue()));
    session
}

// Helper: feed a string one letter at a time.
pub(super) fn type_string(session: &mut DrillSession, s: &str) -> Vec<KeyResponse> {
    s.chars()
        .map(|ch| session.handle_key(KeyEvent::Letter(ch)))
        .collect()
}
