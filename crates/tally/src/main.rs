// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! tally - a vote counter over an embedded SQLite store.
//!
//! This is the binary entry point. Running with no subcommand records one
//! vote for the default voter and prints the new count.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};
use tracing::debug;

mod list;
mod vote;

/// tally - a vote counter over an embedded SQLite store.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Record one vote for a voter and print the new count.
    Vote {
        /// Voter name; defaults to "john doe".
        name: Option<String>,
    },
    /// List every voter and their count.
    List,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match tally_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            tally_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);
    debug!(
        agent = %config.agent.name,
        database_path = %config.storage.database_path,
        "config loaded"
    );

    let result = match cli.command {
        Some(Commands::Vote { name }) => {
            let name = name.as_deref().unwrap_or(vote::DEFAULT_VOTER);
            vote::run_vote(&config, name).await.map(|_| ())
        }
        Some(Commands::List) => list::run_list(&config).await,
        None => vote::run_vote(&config, vote::DEFAULT_VOTER).await.map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tally={log_level},tally_storage={log_level},tally_config={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
