//! One-shot Helix caller.
//!
//! Reads credentials from the environment (or the nearest `.env` up the
//! directory tree), performs a single request and prints `{status, body}`
//! as pretty JSON.

mod args;

use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use helix_client::{HelixConfig, HelixSession};

use crate::args::Cli;

/// Returns whether a `.env` file was applied.
fn report_dotenv(outcome: dotenvy::Result<PathBuf>) -> bool {
    match outcome {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Applied .env");
            true
        }
        Err(err) if err.not_found() => {
            tracing::debug!("No .env found, using process environment only");
            false
        }
        Err(err) => {
            tracing::warn!("Skipping unreadable .env: {err}");
            false
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    report_dotenv(dotenvy::dotenv());
    let config = HelixConfig::from_env()?;

    let mut session = HelixSession::open(config)?;
    let result = session.perform(&cli.into_request()).await;
    session.close();

    let reply = result?;
    let out = json!({ "status": reply.status, "body": reply.body });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
