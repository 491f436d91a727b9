use std::fs;

use super::die;

pub fn scheme_export() {
    print!("{}", crane_core::scheme::default_toml());
}

pub fn scheme_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(crane_core::scheme::parse_scheme_toml(&content), "Error: {}");
    println!(
        "OK: {} initials, {} finals, {} specials",
        tables.initials.len(),
        tables.finals.len(),
        tables.specials.len()
    );
}

pub fn settings_export() {
    print!("{}", crane_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        crane_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: allow_short_full_syllable={}, timed_duration_secs={}, audio.enabled={}",
        s.drill.allow_short_full_syllable, s.drill.timed_duration_secs, s.audio.enabled
    );
}
