//! Practice queue construction from externally segmented text.

use serde::Serialize;
use tracing::debug;

use crate::scheme::{self, Scheme};
use crate::unicode::is_ideograph;

/// Where the entry's current syllable came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyllableSource {
    Auto,
    Manual,
}

/// One character in the practice queue together with its derived code.
///
/// `auto_syllable` is the reading supplied at build time and never changes;
/// the remaining derived fields mutate only through manual correction.
#[derive(Debug, Clone, Serialize)]
pub struct QueueEntry {
    pub character: char,
    pub syllable: String,
    pub auto_syllable: String,
    pub initial: String,
    #[serde(rename = "final")]
    pub final_part: String,
    pub code: String,
    pub source: SyllableSource,
}

/// Build a practice queue from `(character, syllable)` pairs.
///
/// Characters outside the CJK ideograph block (punctuation, latin letters,
/// digits, whitespace) are dropped and get no entry at all. Pure-punctuation
/// input yields an empty queue; sessions must not start on one.
pub fn build_queue(pairs: &[(char, String)]) -> Vec<QueueEntry> {
    let scheme = Scheme::global();
    let mut queue = Vec::new();

    for (character, raw) in pairs {
        if !is_ideograph(*character) {
            debug!(%character, "dropping non-ideograph");
            continue;
        }

        let syllable = scheme::normalize(raw);
        let parts = scheme.parse(&syllable);
        let code = scheme.encode(&syllable, &parts.initial, &parts.final_part);

        queue.push(QueueEntry {
            character: *character,
            syllable: syllable.clone(),
            auto_syllable: syllable,
            initial: parts.initial,
            final_part: parts.final_part,
            code,
            source: SyllableSource::Auto,
        });
    }

    queue
}
