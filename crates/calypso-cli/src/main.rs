//! Inspect site records and replay document-head actions.
//!
//! # Examples
//!
//! ```sh
//! # Every predicate for one site, explaining why autoupdates are off
//! calypso inspect site.json --action autoupdateCore
//!
//! # Same, as JSON
//! calypso inspect site.json --json
//!
//! # Replay actions against a starting state and print each title write
//! calypso title state.json actions.json --config head.json
//! ```

use std::path::{Path, PathBuf};
use std::process;

use calypso_head::prelude::*;
use calypso_site::{FileModAction, SiteReport};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Inspect site records and replay document-head actions.
#[derive(Parser)]
#[command(name = "calypso")]
struct Cli {
    /// Log middleware and predicate decisions to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate every site predicate for a site record JSON file
    Inspect {
        /// Path to the site record
        site: PathBuf,

        /// File action to explain (modifyFiles, autoupdateFiles, autoupdateCore)
        #[arg(long, default_value = "modifyFiles")]
        action: FileModAction,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a JSON array of actions and print every title write
    Title {
        /// Path to the starting state
        state: PathBuf,

        /// Path to a JSON array of actions
        actions: PathBuf,

        /// Path to a head config JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Title already shown before the first action
        #[arg(long, default_value = "")]
        initial_title: String,
    },
}

/// A [`TitleSink`] that prints every write to stdout.
struct PrintingSink(MemoryTitleSink);

impl TitleSink for PrintingSink {
    fn get(&self) -> String {
        self.0.get()
    }

    fn set(&self, title: &str) {
        println!("{title}");
        self.0.set(title);
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

fn inspect(site: &Path, action: FileModAction, json: bool) -> Result<(), String> {
    let site = Site::from_json(&read_file(site)?)?;
    let report = SiteReport::new(&site, action);
    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn replay(
    state: &Path,
    actions: &Path,
    config: Option<&Path>,
    initial_title: String,
) -> Result<(), String> {
    let state = HeadState::from_json(&read_file(state)?)?;
    let actions = HeadAction::list_from_json(&read_file(actions)?)?;
    let config = config.map(HeadConfig::load).unwrap_or_default();

    let sink = MemoryTitleSink::with_title(initial_title);
    let mut store = Store::new(state)
        .with(LoggingMiddleware)
        .with(DocumentTitleMiddleware::with_config(
            PrintingSink(sink.clone()),
            config,
        ));

    debug!("replaying {} action(s)", actions.len());
    for action in actions {
        store.dispatch(action);
    }
    debug!("{} title write(s)", sink.writes());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();

    let result = match &cli.command {
        Command::Inspect { site, action, json } => inspect(site, *action, *json),
        Command::Title {
            state,
            actions,
            config,
            initial_title,
        } => replay(state, actions, config.as_deref(), initial_title.clone()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
