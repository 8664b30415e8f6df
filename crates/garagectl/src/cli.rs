//! Command-line argument parsing

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Garagiste CLI
#[derive(Parser, Debug)]
#[command(name = "garagectl")]
#[command(about = "Garagiste - assistant de diagnostic automobile", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (overrides ~/.config/garagiste/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Knowledge base file (overrides the config)
    #[arg(long, global = true, value_name = "PATH")]
    pub kb: Option<PathBuf>,

    /// ASCII list markers instead of emojis
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Color output: auto, always or never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<String>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand (if not provided, starts a chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Diagnose one description and exit
    Ask {
        /// Problem description
        #[arg(required = true, num_args = 1..)]
        utterance: Vec<String>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Interactive chat session
    Chat,

    /// List the quick questions
    Quick,

    /// List the knowledge base, or validate a knowledge file
    Kb {
        /// File to validate
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

impl Cli {
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chat)
    }
}
