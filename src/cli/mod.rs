//! Command-line interface for taskdash
//!
//! This module defines the CLI structure using clap derive macros.
//! Command handlers live in the `tasks` submodule.

use clap::{Parser, Subcommand};

use crate::error::Result;

mod tasks;

/// taskdash - a tiny persistent task dashboard
///
/// Tracks free-text tasks with completion flags and counters. Running it
/// without a subcommand opens the interactive dashboard; the subcommands
/// expose the same store to scripts.
#[derive(Parser, Debug)]
#[command(name = "taskdash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding the task slot (defaults to the platform data dir)
    #[arg(long, global = true, env = "TASKDASH_DIR")]
    pub dir: Option<std::path::PathBuf>,

    /// Path to a config file (defaults to taskdash.toml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Toggle a task between open and completed
    Toggle {
        /// Task id
        id: u64,
    },

    /// Remove a task
    Rm {
        /// Task id
        id: u64,
    },

    /// List tasks
    List,

    /// Show task counters
    Stats,

    /// Open the interactive dashboard
    Ui,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let common = tasks::CommonOptions {
            dir: self.dir,
            config: self.config,
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Some(Commands::Add { text }) => tasks::run_add(tasks::AddOptions { text, common }),
            Some(Commands::Toggle { id }) => tasks::run_toggle(tasks::ToggleOptions { id, common }),
            Some(Commands::Rm { id }) => tasks::run_rm(tasks::RmOptions { id, common }),
            Some(Commands::List) => tasks::run_list(tasks::ListOptions { common }),
            Some(Commands::Stats) => tasks::run_stats(tasks::StatsOptions { common }),
            Some(Commands::Ui) | None => tasks::run_ui(common),
        }
    }
}
