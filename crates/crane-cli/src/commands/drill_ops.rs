use std::fs;
use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthChar;

use crane_core::queue::build_queue;
use crane_core::scheme::{self, Scheme};
use crane_core::settings;
use crane_session::{DrillSession, KeyEvent, KeyOutcome, KeyResponse, SessionConfig};

use super::die;

#[derive(Serialize)]
struct EncodeReport {
    syllable: String,
    initial: String,
    #[serde(rename = "final")]
    final_part: String,
    code: String,
    valid: bool,
}

pub fn encode(raw: &str, json: bool) {
    let scheme = Scheme::global();
    let syllable = scheme::normalize(raw);
    let parts = scheme.parse(&syllable);
    let code = scheme.encode(&syllable, &parts.initial, &parts.final_part);
    let valid = code.len() == 2;

    if json {
        let report = EncodeReport {
            syllable,
            initial: parts.initial,
            final_part: parts.final_part,
            code,
            valid,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report is serializable")
        );
        return;
    }

    println!("syllable: {syllable}");
    if parts.initial.is_empty() {
        println!("initial:  (zero)");
    } else {
        println!("initial:  {}", parts.initial);
    }
    println!("final:    {}", parts.final_part);
    if valid {
        println!("code:     {code}");
    } else {
        eprintln!("unrecognized syllable, no two-letter code");
        process::exit(1);
    }
}

/// Read `(character, syllable)` pairs, one per line, `#` for comments.
fn read_pairs(file: &str) -> Vec<(char, String)> {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let mut pairs = Vec::new();
    for (lineno, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
            eprintln!("{file}:{}: expected `<character> <syllable>`", lineno + 1);
            process::exit(1);
        };
        let mut chars = first.chars();
        let (Some(character), None) = (chars.next(), chars.next()) else {
            eprintln!("{file}:{}: first field must be a single character", lineno + 1);
            process::exit(1);
        };
        pairs.push((character, second.to_string()));
    }
    pairs
}

pub fn queue(pairs_file: &str, json: bool) {
    let pairs = read_pairs(pairs_file);
    let queue = build_queue(&pairs);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&queue).expect("queue is serializable")
        );
        return;
    }

    for (i, entry) in queue.iter().enumerate() {
        // CJK characters render two columns wide; pad the rest to match.
        let pad = 3usize.saturating_sub(entry.character.width().unwrap_or(1));
        println!(
            "{i:>3}  {}{:pad$}{:<8}  {}",
            entry.character, "", entry.syllable, entry.code
        );
    }
    println!("{} entries", queue.len());
}

fn describe(resp: &KeyResponse) -> String {
    match resp.outcome {
        KeyOutcome::Pending => "partial".to_string(),
        KeyOutcome::Advance => match &resp.record {
            Some(r) if r.was_error => format!("skipped {}", r.character),
            Some(r) => format!("completed {} ({})", r.character, r.code),
            None => "advance".to_string(),
        },
        KeyOutcome::Mistake {
            wrong_key,
            expected_key,
        } => format!("mistake: got {wrong_key}, expected {expected_key}"),
        KeyOutcome::Ignored => "ignored".to_string(),
    }
}

/// Drive a scripted key sequence through a session, printing every
/// transition. Script symbols: lowercase letters are keys, `<` backspace,
/// `!` skip, `.` one countdown tick.
pub fn sim(pairs_file: &str, keys: &str, timed: Option<u32>) {
    let pairs = read_pairs(pairs_file);
    let queue = build_queue(&pairs);

    let mut session = DrillSession::new(SessionConfig::from_settings(settings::settings()));
    let started = match timed {
        Some(secs) => session.start_timed(queue, secs),
        None => session.start(queue),
    };
    if !started {
        eprintln!("no ideographs in {pairs_file}; nothing to practice");
        process::exit(1);
    }

    for key in keys.chars() {
        match key {
            '.' => {
                session.tick();
                match session.time_left() {
                    Some(t) => println!(".  tick, {t}s left"),
                    None => println!(".  tick (untimed)"),
                }
            }
            '<' | '!' | 'a'..='z' => {
                let event = match key {
                    '<' => KeyEvent::Backspace,
                    '!' => KeyEvent::Skip,
                    c => KeyEvent::Letter(c),
                };
                let resp = session.handle_key(event);
                println!(
                    "{key}  {:<32} index={} buffer={:?}",
                    describe(&resp),
                    session.current_index(),
                    session.buffer()
                );
            }
            other => eprintln!("ignoring {other:?} in key script"),
        }
    }

    let stats = session.stats();
    println!(
        "correct={} errors={} complete={}",
        stats.correct,
        stats.errors,
        session.is_complete()
    );
}
