//! Global settings loaded from TOML, same OnceLock pattern as the scheme
//! tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub drill: DrillSettings,
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrillSettings {
    /// Accept the raw syllable as an alias for the code when it is at most
    /// two letters long.
    pub allow_short_full_syllable: bool,
    pub timed_duration_secs: u32,
}

/// Consumed by the external audio player; the core only picks which sound
/// descriptor to emit.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub enabled: bool,
    pub pack: String,
    pub key_volume: f32,
    pub success_volume: f32,
    pub error_volume: f32,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_volume {
        ($field:ident) => {
            if !(0.0..=1.0).contains(&s.audio.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!("audio.", stringify!($field)).to_string(),
                    reason: "must be between 0.0 and 1.0".to_string(),
                });
            }
        };
    }

    check_volume!(key_volume);
    check_volume!(success_volume);
    check_volume!(error_volume);

    if s.audio.pack.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "audio.pack".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    if s.drill.timed_duration_secs == 0 {
        return Err(SettingsError::InvalidValue {
            field: "drill.timed_duration_secs".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}
