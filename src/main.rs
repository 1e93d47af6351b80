use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use clap::Parser;

use appstate::app::AppStore;
use appstate::cli::{Cli, Command};
use appstate::config::Config;
use appstate::logging::init_tracing;
use appstate::replay::replay;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.logging.filter);

    let store = AppStore::from_config(&config);

    match &cli.command {
        Command::Defaults => print_state(&store)?,
        Command::Replay { file, snapshots } => {
            if *snapshots {
                store.subscribe(|state| {
                    // Listeners can't propagate errors; a broken stdout surfaces on the final print.
                    if let Ok(line) = serde_json::to_string(state) {
                        let _ = writeln!(io::stdout().lock(), "{}", line);
                    }
                });
            }

            let summary = match Command::replay_input(file) {
                Some(path) => {
                    let log = File::open(path)
                        .with_context(|| format!("Failed to open action log '{}'", path.display()))?;
                    replay(&store, BufReader::new(log))?
                }
                None => replay(&store, io::stdin().lock())?,
            };
            tracing::debug!(?summary, "Replay summary");

            print_state(&store)?;
        }
    }

    Ok(())
}

fn print_state(store: &AppStore) -> Result<()> {
    let json = serde_json::to_string_pretty(&*store.get_state())?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
