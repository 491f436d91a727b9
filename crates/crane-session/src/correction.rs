//! Session-side correction glue. The matcher's pending state compares
//! against the current entry's code, so it must be discarded whenever that
//! code changes under it.

use crane_core::correction::{apply_correction, reset_correction, CorrectionError};

use super::DrillSession;

impl DrillSession {
    /// Re-encode the entry at `index` from `raw`; rejections mutate
    /// nothing. When the corrected entry is the current one, the in-flight
    /// buffer and error mark are cleared, since the target the matcher
    /// compares against has changed. A no-op for an index outside the
    /// queue.
    pub fn correct_entry(&mut self, index: usize, raw: &str) -> Result<(), CorrectionError> {
        let Some(entry) = self.queue.get_mut(index) else {
            return Ok(());
        };
        apply_correction(entry, raw)?;
        if index == self.current_index {
            self.buffer.clear();
            self.error_mark = None;
        }
        Ok(())
    }

    /// Undo any override on the entry at `index`, re-deriving from the
    /// auto-supplied syllable. Clears in-flight matcher state when the
    /// entry is the current one.
    pub fn reset_entry(&mut self, index: usize) {
        let Some(entry) = self.queue.get_mut(index) else {
            return;
        };
        reset_correction(entry);
        if index == self.current_index {
            self.buffer.clear();
            self.error_mark = None;
        }
    }

    /// Correct the entry the matcher is currently on.
    pub fn correct_current(&mut self, raw: &str) -> Result<(), CorrectionError> {
        self.correct_entry(self.current_index, raw)
    }

    /// Reset the entry the matcher is currently on.
    pub fn reset_current(&mut self) {
        self.reset_entry(self.current_index);
    }
}
