//! poly-schema — schema report extractor.
//!
//! Reads a JSON schema descriptor, connects to a Polypheny server, fetches
//! one sample row per table and writes a short report to stdout and to the
//! output path.
//!
//! ```bash
//! poly-schema schema.json report.txt --host localhost --port 20591
//! ```

use std::fs;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use poly_link::PolyClient;

mod args;
mod descriptor;
mod error;
mod report;

use args::Cli;
use descriptor::SchemaDescriptor;
use error::Result;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Validate the descriptor before touching the network; a non-relational
    // datamodel must never reach the server.
    let descriptor = SchemaDescriptor::load(&cli.descriptor)?;
    descriptor.ensure_relational()?;

    let client = PolyClient::connect(&cli.connection()).await?;

    let outcome = report::extract(&client, &descriptor).await;
    if let Err(e) = client.close().await {
        debug!("connection close: {}", e);
    }
    let reports = outcome?;

    let text = report::render(&reports);
    print!("{}", text);
    fs::write(&cli.output, &text).map_err(|e| {
        error::SchemaError::File(format!("failed to write {}: {}", cli.output.display(), e))
    })?;

    Ok(())
}
