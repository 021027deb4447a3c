//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Inspect and edit the Chime alarm clock's persisted state: alarm
/// settings and recent-file history
#[derive(Parser, Debug)]
#[command(name = "chimecfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Settings document (default: platform config dir)
    #[arg(long, global = true, env = "CHIMECFG_SETTINGS_FILE", value_hint = ValueHint::FilePath)]
    pub settings_file: Option<PathBuf>,

    /// History document (default: platform config dir)
    #[arg(long, global = true, env = "CHIMECFG_RECENT_FILE", value_hint = ValueHint::FilePath)]
    pub recent_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current alarm settings
    Show,

    /// Update alarm settings fields and save
    Set {
        /// Alarm hour (0-23)
        #[arg(long)]
        hour: Option<u32>,

        /// Alarm minute (0-59)
        #[arg(long)]
        minute: Option<u32>,

        /// Alarm second (0-59)
        #[arg(long)]
        second: Option<u32>,

        /// Timezone index
        #[arg(long)]
        timezone: Option<usize>,

        /// Alarm audio file (also recorded in the recent-file history)
        #[arg(long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Ask for confirmation on exit
        #[arg(long)]
        confirm_exit: Option<bool>,
    },

    /// Manage the recent-file history
    Recent {
        #[command(subcommand)]
        command: RecentCommands,
    },

    /// Parse a document and render its entity tree
    Dump {
        /// Document to parse
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show resolved document locations
    Path,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Recent-history subcommands
#[derive(Subcommand, Debug)]
pub enum RecentCommands {
    /// List entries, oldest first
    List,

    /// Record a value
    Add {
        /// Value to record
        value: String,
    },

    /// Remove all entries
    Clear,
}
