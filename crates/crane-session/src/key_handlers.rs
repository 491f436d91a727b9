use tracing::debug_span;

use super::types::{ErrorMark, KeyEvent, KeyOutcome, KeyResponse, SoundKind};
use super::DrillSession;

impl DrillSession {
    /// Process one key event. Each transition completes before the next
    /// event is accepted; everything the caller must do (play a sound, feed
    /// a record to aggregation) travels in the returned response.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        // Idle and finished sessions consume nothing; a timed run stops
        // accepting keys the moment its budget is spent.
        if !self.started || self.is_complete() {
            return KeyResponse::not_consumed();
        }

        match event {
            KeyEvent::Letter(key) => self.handle_letter(key),
            KeyEvent::Backspace => self.handle_backspace(),
            KeyEvent::Skip => self.handle_skip(),
        }
    }

    fn handle_letter(&mut self, key: char) -> KeyResponse {
        // Upstream filters to single lowercase letters; drop anything else
        // so the automaton still has a transition for every input.
        if !key.is_ascii_lowercase() {
            return KeyResponse::not_consumed();
        }

        let entry = &self.queue[self.current_index];
        let target = entry.code.clone();
        let syllable = entry.syllable.clone();

        // A degenerate entry without a code has nothing to match against;
        // skip is the only way past it.
        if target.is_empty() {
            return KeyResponse::not_consumed();
        }

        let mut candidates = vec![target.as_str()];
        // Very short syllables may be typed out in full as an alternative
        // to the code.
        if self.config.allow_short_full_syllable && syllable.chars().count() <= 2 {
            candidates.push(syllable.as_str());
        }

        let mut next_buffer = self.buffer.clone();
        next_buffer.push(key);

        let matches: Vec<&str> = candidates
            .into_iter()
            .filter(|c| c.starts_with(next_buffer.as_str()))
            .collect();

        if matches.is_empty() {
            let expected =
                target.as_bytes()[self.buffer.len().min(target.len().saturating_sub(1))] as char;
            self.stats.errors += 1;
            self.error_mark = Some(ErrorMark {
                wrong_key: key,
                expected_key: expected,
            });
            self.buffer.clear();
            let record = self.push_record(true);
            return self.make_response(
                KeyOutcome::Mistake {
                    wrong_key: key,
                    expected_key: expected,
                },
                Some(record),
                SoundKind::Error,
            );
        }

        if matches.iter().any(|c| c.len() == next_buffer.len()) {
            self.stats.correct += 1;
            let record = self.push_record(false);
            self.current_index += 1;
            self.buffer.clear();
            self.error_mark = None;
            return self.make_response(KeyOutcome::Advance, Some(record), SoundKind::Success);
        }

        self.buffer = next_buffer;
        self.error_mark = None;
        self.make_response(KeyOutcome::Pending, None, SoundKind::Key)
    }

    fn handle_backspace(&mut self) -> KeyResponse {
        // The only operation that shortens the buffer; never touches the
        // queue position or the tallies.
        if self.buffer.is_empty() {
            return KeyResponse::not_consumed();
        }
        self.buffer.pop();
        self.error_mark = None;
        KeyResponse::consumed(KeyOutcome::Pending)
    }

    fn handle_skip(&mut self) -> KeyResponse {
        // Skipping counts as one error against the skipped entry and is the
        // only way past a character without matching its code.
        self.stats.errors += 1;
        let record = self.push_record(true);
        self.current_index += 1;
        self.buffer.clear();
        self.error_mark = None;
        let mut resp = KeyResponse::consumed(KeyOutcome::Advance);
        resp.record = Some(record);
        resp
    }
}
