use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use linkscreen_core::{RecordStore, config_file};

/// Link review queue - inspect and update the queue file from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the queue CSV file (defaults to LINKSCREEN_CSV or the config file)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show completed / total counts
    Stats,
    /// List pending URLs with their record indices
    Pending,
    /// Set a URL's completion flag (conventionally "true" or "false")
    Mark {
        /// Exact URL of the record to update
        url: String,
        /// Status value to write
        status: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let store = RecordStore::new(resolve_csv_path(cli.csv));

    match cli.command {
        Command::Stats => stats(&store),
        Command::Pending => pending(&store),
        Command::Mark { url, status } => mark(&store, &url, &status),
    }
}

fn resolve_csv_path(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| std::env::var("LINKSCREEN_CSV").ok().map(PathBuf::from))
        .or_else(|| {
            config_file::load_config()
                .storage
                .and_then(|s| s.csv_path.map(PathBuf::from))
        })
        .unwrap_or_else(|| PathBuf::from("iglink.csv"))
}

fn stats(store: &RecordStore) -> anyhow::Result<()> {
    let records = store.load()?;
    let (completed, total) = RecordStore::completed_count(&records);
    let pending = RecordStore::pending_indices(&records).len();
    println!(
        "{} {} done / {} total, {} pending",
        "queue:".bold(),
        completed.green(),
        total,
        pending.yellow()
    );
    Ok(())
}

fn pending(store: &RecordStore) -> anyhow::Result<()> {
    let records = store.load()?;
    for i in RecordStore::pending_indices(&records) {
        println!("{}  {}", format!("{i:>5}").dimmed(), records[i].url);
    }
    Ok(())
}

fn mark(store: &RecordStore, url: &str, status: &str) -> anyhow::Result<()> {
    let records = store.set_status(url, status)?;
    let remaining = RecordStore::pending_indices(&records).len();
    println!(
        "{} {url} -> {status} ({remaining} pending)",
        "marked".green().bold()
    );
    Ok(())
}
