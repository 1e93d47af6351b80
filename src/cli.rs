use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Drive the application store from the command line.
#[derive(Debug, Parser)]
#[command(name = "appstate", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/appstate/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the initial state tree as JSON
    Defaults,

    /// Replay a JSON-lines action log and print the final state
    Replay {
        /// Action log; reads stdin when omitted or "-"
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print every published snapshot as one JSON line before the final state
        #[arg(long)]
        snapshots: bool,
    },
}

impl Command {
    /// Input path for `replay`, `None` meaning stdin.
    pub fn replay_input(file: &Option<PathBuf>) -> Option<&PathBuf> {
        file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
