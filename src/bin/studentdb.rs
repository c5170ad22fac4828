//! StudentDB Binary
//!
//! Runs the interactive shell against a data file.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use studentdb::{Config, RecordStore, Shell, SyncMode};
use tracing_subscriber::{fmt, EnvFilter};

/// StudentDB
#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(about = "Interactive student record manager backed by a flat binary file")]
#[command(version)]
struct Args {
    /// Data file
    #[arg(short, long, default_value = "students.dat")]
    data_file: PathBuf,

    /// Scratch file used while deleting
    #[arg(short, long, default_value = "temp.dat")]
    temp_file: PathBuf,

    /// fsync after every write
    #[arg(long)]
    sync: bool,
}

fn main() {
    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("StudentDB v{}", studentdb::VERSION);
    tracing::info!("Data file: {}", args.data_file.display());

    let sync_mode = if args.sync {
        SyncMode::EveryWrite
    } else {
        SyncMode::OnClose
    };

    let config = Config::builder()
        .data_file(args.data_file)
        .temp_file(args.temp_file)
        .sync_mode(sync_mode)
        .build();

    let store = match RecordStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(store, stdin.lock(), stdout.lock());

    if let Err(e) = shell.run() {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}
