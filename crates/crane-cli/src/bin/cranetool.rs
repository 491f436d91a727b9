use clap::{Parser, Subcommand};

use crane_cli::commands::{config_ops, drill_ops};

#[derive(Parser)]
#[command(name = "cranetool", about = "Shuangpin drill diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show how a syllable splits and encodes
    Encode {
        /// Romanized syllable (e.g. zhong, lü, nu:e)
        syllable: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Build a practice queue from a pairs file and dump it
    Queue {
        /// Path to a pairs file: one `<character> <syllable>` per line
        pairs_file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Drive a scripted key sequence through a session
    Sim {
        /// Path to a pairs file: one `<character> <syllable>` per line
        pairs_file: String,
        /// Key script: lowercase letters, `<` backspace, `!` skip, `.` tick
        keys: String,
        /// Run timed with this budget in seconds
        #[arg(long)]
        timed: Option<u32>,
    },

    /// Print the embedded default scheme TOML
    SchemeExport,

    /// Validate a scheme TOML file
    SchemeValidate {
        /// Path to the scheme TOML file
        file: String,
    },

    /// Print the embedded default settings TOML
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode { syllable, json } => drill_ops::encode(&syllable, json),
        Command::Queue { pairs_file, json } => drill_ops::queue(&pairs_file, json),
        Command::Sim {
            pairs_file,
            keys,
            timed,
        } => drill_ops::sim(&pairs_file, &keys, timed),
        Command::SchemeExport => config_ops::scheme_export(),
        Command::SchemeValidate { file } => config_ops::scheme_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
