//! studentdb interactive menu
//!
//! Runs the text menu against a store rooted at the chosen data directory.

use std::io;

use clap::Parser;
use studentdb::menu::Session;
use studentdb::{Config, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// studentdb
#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(about = "Single-file student record store with an interactive menu")]
#[command(version)]
struct Args {
    /// Directory where `<name>.db` database files live
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Database file extension
    #[arg(short, long, default_value = "db")]
    extension: String,
}

fn main() {
    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,studentdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("studentdb v{}", studentdb::VERSION);
    tracing::debug!("Data directory: {}", args.data_dir);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .db_extension(&args.extension)
        .build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Store::new(config), stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Session ended: {}", e);
        std::process::exit(1);
    }
}
