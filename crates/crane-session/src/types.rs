use crane_core::settings::Settings;

/// Key events the session consumes. Letter events are restricted upstream
/// to single lowercase symbols; control signals arrive as discrete variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Letter(char),
    Backspace,
    Skip,
}

/// Sound descriptor attached to a response. Playback is the caller's
/// problem; it can neither fail nor delay a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Key,
    Success,
    Error,
}

/// Fire-and-forget side effects accompanying a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideEffects {
    pub sound: Option<SoundKind>,
}

/// Classification of one processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No event emitted; the automaton is waiting for more input.
    Pending,
    /// The current entry was matched (or skipped) in full; the queue
    /// advanced by one.
    Advance,
    /// The key cannot extend any candidate sequence; the buffer was reset
    /// and the same entry must be retried.
    Mistake { wrong_key: char, expected_key: char },
    /// Event outside an active session, or not applicable in this state.
    Ignored,
}

/// Per-event record for external aggregation (accuracy, streaks,
/// achievements). The shape is fixed; aggregation policy is out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillRecord {
    pub character: char,
    pub syllable: String,
    pub code: String,
    pub was_error: bool,
}

/// Response from `handle_key`, returned to the driving frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub outcome: KeyOutcome,
    pub record: Option<DrillRecord>,
    pub effects: SideEffects,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            outcome: KeyOutcome::Ignored,
            record: None,
            effects: SideEffects::default(),
        }
    }

    pub(crate) fn consumed(outcome: KeyOutcome) -> Self {
        Self {
            consumed: true,
            outcome,
            ..Self::not_consumed()
        }
    }
}

/// Mark left by the last mistake: the key that was pressed and the code
/// letter that was expected. Cleared by the next key, backspace, manual
/// correction, or an explicit `clear_error_mark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMark {
    pub wrong_key: char,
    pub expected_key: char,
}

/// Running tallies for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrillStats {
    pub correct: u32,
    pub errors: u32,
}

/// Immutable per-session options, resolved once when the session is built
/// rather than read from ambient state on every key.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub allow_short_full_syllable: bool,
    pub sound_enabled: bool,
}

impl SessionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            allow_short_full_syllable: settings.drill.allow_short_full_syllable,
            sound_enabled: settings.audio.enabled,
        }
    }
}

impl Default for SessionConfig {
    /// Matches the embedded default settings.
    fn default() -> Self {
        Self {
            allow_short_full_syllable: true,
            sound_enabled: true,
        }
    }
}
