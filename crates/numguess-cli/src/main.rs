mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use numguess_core::Session;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Warnings stay visible unless RUST_LOG says otherwise
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("numguess=warn,numguess_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let session = Session::with_paths(args.session_paths()).context("Invalid data")?;
    debug!("Session files: {:?}", session.paths());

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let report = match session.run(&mut rand::rng(), &mut input, &mut output) {
        Ok(report) => report,
        Err(e) if e.is_validation() => return Err(e).context("Invalid data"),
        Err(e) => return Err(e).context("Unexpected error"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
