//! QA Playground CLI - store fixtures and maintenance.
//!
//! # Usage
//!
//! ```bash
//! # Load users and a cart from a fixture file
//! qa-cli seed fixtures/demo.yaml
//!
//! # Wipe the store first, then seed
//! qa-cli seed --clear fixtures/demo.yaml
//!
//! # Print every stored key as JSON
//! qa-cli dump
//!
//! # Remove everything, or only some keys
//! qa-cli reset
//! qa-cli reset qa_cart qa_session
//! ```
//!
//! The store file comes from `--store`, then `PLAYGROUND_STORE_PATH`, then
//! `qa-playground-store.json` in the working directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qa_playground_storefront::store::{FileStore, Store};

mod commands;

/// Store file used when neither `--store` nor the environment names one.
const DEFAULT_STORE_PATH: &str = "qa-playground-store.json";

#[derive(Parser)]
#[command(name = "qa-cli")]
#[command(author, version, about = "QA Playground CLI tools")]
struct Cli {
    /// JSON file backing the playground store
    #[arg(long, global = true, env = "PLAYGROUND_STORE_PATH", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed users, a session and a cart from a YAML fixture
    Seed {
        /// Fixture file
        file: PathBuf,

        /// Remove every stored key before seeding
        #[arg(long)]
        clear: bool,
    },
    /// Print every stored key as one JSON object
    Dump,
    /// Remove stored keys (all of them when none are named)
    Reset {
        /// Keys to remove
        keys: Vec<String>,
    },
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(path = %cli.store.display(), "Opening store");
    let mut store = Store::new(FileStore::new(cli.store));

    match cli.command {
        Commands::Seed { file, clear } => {
            if clear {
                commands::reset::run(&mut store, &[])?;
            }
            let fixture = commands::seed::load(&file)?;
            let summary = commands::seed::run(&mut store, &fixture)?;
            tracing::info!(
                users = summary.users_created,
                skipped = summary.users_skipped,
                lines = summary.cart_lines,
                logged_in = summary.logged_in.as_deref().unwrap_or("-"),
                "Seeding complete"
            );
        }
        Commands::Dump => {
            commands::dump::run(&store, &mut std::io::stdout().lock())?;
        }
        Commands::Reset { keys } => {
            let removed = commands::reset::run(&mut store, &keys)?;
            tracing::info!(removed, "Store reset");
        }
    }
    Ok(())
}
