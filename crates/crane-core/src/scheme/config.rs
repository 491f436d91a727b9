use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct SchemeConfig {
    initials: BTreeMap<String, String>,
    finals: BTreeMap<String, String>,
    specials: BTreeMap<String, String>,
}

/// The three raw lookup tables of a two-key scheme, as parsed from TOML.
#[derive(Debug)]
pub struct SchemeTables {
    pub initials: BTreeMap<String, String>,
    pub finals: BTreeMap<String, String>,
    pub specials: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptyTable(&'static str),
    #[error("non-lowercase key in [{table}]: {key}")]
    BadKey { table: &'static str, key: String },
    #[error("value for {table}.{key} must be {expected} lowercase letter(s): {value}")]
    BadValue {
        table: &'static str,
        key: String,
        expected: usize,
        value: String,
    },
    #[error("scheme already initialized")]
    AlreadyInitialized,
}

fn is_lowercase_ascii(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

fn check_table(
    name: &'static str,
    table: &BTreeMap<String, String>,
    value_len: usize,
) -> Result<(), SchemeError> {
    if table.is_empty() {
        return Err(SchemeError::EmptyTable(name));
    }
    for (key, value) in table {
        if !is_lowercase_ascii(key) {
            return Err(SchemeError::BadKey {
                table: name,
                key: key.clone(),
            });
        }
        if value.len() != value_len || !is_lowercase_ascii(value) {
            return Err(SchemeError::BadValue {
                table: name,
                key: key.clone(),
                expected: value_len,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Parse TOML text into validated scheme tables.
///
/// Initial and final entries map to exactly one code letter; special
/// syllables carry their full two-letter code.
pub fn parse_scheme_toml(toml_str: &str) -> Result<SchemeTables, SchemeError> {
    let config: SchemeConfig =
        toml::from_str(toml_str).map_err(|e| SchemeError::Parse(e.to_string()))?;

    check_table("initials", &config.initials, 1)?;
    check_table("finals", &config.finals, 1)?;
    check_table("specials", &config.specials, 2)?;

    Ok(SchemeTables {
        initials: config.initials,
        finals: config.finals,
        specials: config.specials,
    })
}
