use super::types::{DrillRecord, KeyOutcome, KeyResponse, SideEffects, SoundKind};
use super::DrillSession;

impl DrillSession {
    /// Record the current entry's outcome for later `take_records` drain
    /// and hand a copy back for the response.
    pub(crate) fn push_record(&mut self, was_error: bool) -> DrillRecord {
        let entry = &self.queue[self.current_index];
        let record = DrillRecord {
            character: entry.character,
            syllable: entry.syllable.clone(),
            code: entry.code.clone(),
            was_error,
        };
        self.records.push(record.clone());
        record
    }

    pub(crate) fn make_response(
        &self,
        outcome: KeyOutcome,
        record: Option<DrillRecord>,
        sound: SoundKind,
    ) -> KeyResponse {
        KeyResponse {
            consumed: true,
            outcome,
            record,
            effects: SideEffects {
                sound: self.config.sound_enabled.then_some(sound),
            },
        }
    }
}
