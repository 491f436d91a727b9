//! Xiaohe two-key encoding: romanized syllable → two-letter code.
//!
//! The scheme is three lookup tables loaded from an embedded TOML document:
//! initial clusters, finals, and the zero-initial special syllables that
//! carry fixed two-letter codes. The finals table is many-to-one by design:
//! distinct finals share a code letter.

mod config;

pub use config::{parse_scheme_toml, SchemeError, SchemeTables};

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_scheme.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// `ü` is spelled as a plain `u` after these initials; the parser rewrites
/// it back to the substitute letter `v`.
const FRONTING_INITIALS: [&str; 4] = ["j", "q", "x", "y"];

/// Lowercase and map both umlaut-vowel spellings (`ü`, `u:`) to `v`.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace("u:", "v").replace('ü', "v")
}

/// A syllable split into its consonant cluster and vowel/coda part.
/// The initial is empty for zero-initial syllables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableParts {
    pub initial: String,
    pub final_part: String,
}

pub struct Scheme {
    initials: BTreeMap<String, String>,
    finals: BTreeMap<String, String>,
    specials: BTreeMap<String, String>,
    /// Two-letter clusters, matched before any single-letter initial.
    clusters: Vec<String>,
    singles: Vec<String>,
}

impl Scheme {
    /// Set a custom scheme TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), SchemeError> {
        // Validate eagerly
        parse_scheme_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| SchemeError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Scheme {
        static INSTANCE: OnceLock<Scheme> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let tables = parse_scheme_toml(toml_str).expect("scheme TOML must be valid");
            Scheme::from_tables(tables)
        })
    }

    pub fn from_tables(tables: SchemeTables) -> Scheme {
        let (clusters, singles) = tables
            .initials
            .keys()
            .cloned()
            .partition(|k| k.len() > 1);
        Scheme {
            initials: tables.initials,
            finals: tables.finals,
            specials: tables.specials,
            clusters,
            singles,
        }
    }

    /// Split a syllable into initial and final.
    ///
    /// Special whole syllables bypass decomposition; otherwise clusters are
    /// matched longest-first, then single letters, then the whole syllable
    /// becomes a generic zero-initial final.
    pub fn parse(&self, raw: &str) -> SyllableParts {
        let syllable = normalize(raw);

        if self.specials.contains_key(&syllable) {
            return SyllableParts {
                initial: String::new(),
                final_part: syllable,
            };
        }

        for cluster in &self.clusters {
            if let Some(rest) = syllable.strip_prefix(cluster.as_str()) {
                return SyllableParts {
                    initial: cluster.clone(),
                    final_part: rest.to_string(),
                };
            }
        }

        for single in &self.singles {
            if let Some(rest) = syllable.strip_prefix(single.as_str()) {
                let mut final_part = rest.to_string();
                if FRONTING_INITIALS.contains(&single.as_str()) {
                    if let Some(tail) = final_part.strip_prefix('u') {
                        final_part = format!("v{tail}");
                    }
                }
                return SyllableParts {
                    initial: single.clone(),
                    final_part,
                };
            }
        }

        SyllableParts {
            initial: String::new(),
            final_part: syllable,
        }
    }

    /// Encode parsed parts into the two-letter code.
    ///
    /// Expects `syllable` in the normalized form `parse` produces. A valid
    /// syllable always yields exactly two lowercase letters; any other
    /// length means the syllable is not in the scheme and the caller must
    /// treat it as unrecognized.
    pub fn encode(&self, syllable: &str, initial: &str, final_part: &str) -> String {
        if let Some(code) = self.specials.get(syllable) {
            return code.clone();
        }

        if initial.is_empty() {
            // Zero-initial: first letter of the final plus its code letter.
            let Some(first) = final_part.chars().next() else {
                return String::new();
            };
            let mut code = String::new();
            code.push(first);
            match self.finals.get(final_part) {
                Some(key) => code.push_str(key),
                None => code.push(first),
            }
            return code;
        }

        let initial_key = self
            .initials
            .get(initial)
            .map(String::as_str)
            .unwrap_or(initial);
        let final_key = self
            .finals
            .get(final_part)
            .map(String::as_str)
            .unwrap_or(final_part);
        format!("{initial_key}{final_key}")
    }

    /// Normalize, parse, and encode in one step.
    pub fn encode_syllable(&self, raw: &str) -> String {
        let syllable = normalize(raw);
        let parts = self.parse(&syllable);
        self.encode(&syllable, &parts.initial, &parts.final_part)
    }
}

/// Returns the embedded default scheme TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
