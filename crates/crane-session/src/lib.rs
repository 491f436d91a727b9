//! Stateful drill session: consumes single-key events against a queue of
//! encoded syllables and classifies each keystroke as advancing, partially
//! matching, or a mistake.
//!
//! `DrillSession` owns the queue and matcher state for exactly one practice
//! run. Starting a new run replaces everything wholesale; there is no
//! partial teardown.

mod correction;
mod key_handlers;
mod response;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use crane_core::queue::QueueEntry;

pub use crane_core::correction::CorrectionError;
pub use types::{
    DrillRecord, DrillStats, ErrorMark, KeyEvent, KeyOutcome, KeyResponse, SessionConfig,
    SideEffects, SoundKind,
};

pub struct DrillSession {
    queue: Vec<QueueEntry>,
    current_index: usize,
    /// At most one pending symbol: codes are two letters and aliases at
    /// most two, so a partial match is always a single symbol.
    buffer: String,
    error_mark: Option<ErrorMark>,
    stats: DrillStats,
    started: bool,
    /// Remaining seconds for timed runs; `None` when untimed.
    time_left: Option<u32>,
    records: Vec<DrillRecord>,
    config: SessionConfig,
}

impl DrillSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            queue: Vec::new(),
            current_index: 0,
            buffer: String::new(),
            error_mark: None,
            stats: DrillStats::default(),
            started: false,
            time_left: None,
            records: Vec::new(),
            config,
        }
    }

    /// Start a new run, discarding all prior queue and matcher state.
    /// An empty queue is a no-op: the session stays idle and returns false.
    pub fn start(&mut self, queue: Vec<QueueEntry>) -> bool {
        if queue.is_empty() {
            return false;
        }
        self.queue = queue;
        self.current_index = 0;
        self.buffer.clear();
        self.error_mark = None;
        self.stats = DrillStats::default();
        self.records.clear();
        self.time_left = None;
        self.started = true;
        true
    }

    /// Start a timed run with a countdown of `secs` seconds.
    pub fn start_timed(&mut self, queue: Vec<QueueEntry>, secs: u32) -> bool {
        if !self.start(queue) {
            return false;
        }
        self.time_left = Some(secs);
        true
    }

    /// External 1 Hz countdown tick. Only ever moves a timed run toward
    /// completion.
    pub fn tick(&mut self) {
        if !self.started {
            return;
        }
        if let Some(t) = self.time_left.as_mut() {
            *t = t.saturating_sub(1);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Complete once every entry is matched or the time budget is spent.
    pub fn is_complete(&self) -> bool {
        self.started && (self.current_index >= self.queue.len() || self.time_left == Some(0))
    }

    pub fn current_entry(&self) -> Option<&QueueEntry> {
        if !self.started || self.is_complete() {
            return None;
        }
        self.queue.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn error_mark(&self) -> Option<ErrorMark> {
        self.error_mark
    }

    pub fn stats(&self) -> DrillStats {
        self.stats
    }

    pub fn queue(&self) -> &[QueueEntry] {
        &self.queue
    }

    pub fn time_left(&self) -> Option<u32> {
        self.time_left
    }

    /// Clear the mistake mark. The short visual delay before clearing is a
    /// presentation concern; the caller runs the timer and calls this.
    pub fn clear_error_mark(&mut self) {
        self.error_mark = None;
    }

    /// Take buffered drill records, clearing the internal buffer. The
    /// caller feeds these to whatever aggregation it keeps.
    pub fn take_records(&mut self) -> Vec<DrillRecord> {
        std::mem::take(&mut self.records)
    }

    /// Characters per minute over an externally measured elapsed time.
    pub fn chars_per_minute(&self, elapsed_secs: u64) -> u32 {
        if elapsed_secs == 0 || self.stats.correct == 0 {
            return 0;
        }
        ((u64::from(self.stats.correct) * 60 + elapsed_secs / 2) / elapsed_secs) as u32
    }
}
