//! Line-oriented driver for the rules engine.
//!
//! Reads one command per line from stdin and writes the reply to stdout.
//! Squares are algebraic (`e2`). Type `help` for the command list.

mod config;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{CliConfig, DEFAULT_CONFIG};
use session::{Outcome, Session};

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = CliConfig::load_or_default(&config_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!(config = %config_path.display(), "starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(&config);

    for line in stdin.lock().lines() {
        let line = line?;
        match session.execute(line.trim()) {
            Outcome::Reply(text) if text.is_empty() => continue,
            Outcome::Reply(text) => {
                writeln!(stdout, "{text}")?;
                stdout.flush()?;
            }
            Outcome::Quit => break,
        }
    }
    Ok(())
}
