//! Manual override for a wrongly guessed reading.
//!
//! The auto-supplied syllable can be wrong for polyphonic characters; the
//! fix is a manual re-entry, re-encoded in place. `auto_syllable` is kept so
//! the override can always be undone.

use crate::queue::{QueueEntry, SyllableSource};
use crate::scheme::{self, Scheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CorrectionError {
    #[error("syllable must be lowercase letters only")]
    NotAlphabetic,
    #[error("unrecognized syllable, no two-letter code")]
    Unrecognized,
}

/// Replace the entry's syllable with `raw` and re-derive its code.
///
/// Rejects without mutating on non-alphabetic input or when the parsed
/// result has no two-letter code. `source` becomes `Manual` only when the
/// accepted syllable actually differs from the auto-supplied one.
pub fn apply_correction(entry: &mut QueueEntry, raw: &str) -> Result<(), CorrectionError> {
    let syllable = scheme::normalize(raw.trim());
    if syllable.is_empty() || !syllable.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(CorrectionError::NotAlphabetic);
    }

    let scheme = Scheme::global();
    let parts = scheme.parse(&syllable);
    let code = scheme.encode(&syllable, &parts.initial, &parts.final_part);
    if code.len() != 2 {
        return Err(CorrectionError::Unrecognized);
    }

    entry.source = if syllable == entry.auto_syllable {
        SyllableSource::Auto
    } else {
        SyllableSource::Manual
    };
    entry.syllable = syllable;
    entry.initial = parts.initial;
    entry.final_part = parts.final_part;
    entry.code = code;
    Ok(())
}

/// Re-derive the entry from its auto-supplied syllable, undoing any override.
pub fn reset_correction(entry: &mut QueueEntry) {
    let scheme = Scheme::global();
    let syllable = scheme::normalize(&entry.auto_syllable);
    let parts = scheme.parse(&syllable);
    entry.code = scheme.encode(&syllable, &parts.initial, &parts.final_part);
    entry.syllable = syllable;
    entry.initial = parts.initial;
    entry.final_part = parts.final_part;
    entry.source = SyllableSource::Auto;
}
