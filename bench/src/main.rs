//! poly-bench — raw SQL vs. stored procedure insert benchmark.
//!
//! Creates a scratch table and a no-argument stored procedure on a running
//! Polypheny server, times a raw INSERT against invoking the procedure for a
//! configurable number of iterations, prints mean/variance/standard
//! deviation for both series and writes the raw durations to a CSV file,
//! then drops everything it created.

use std::path::Path;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use poly_link::PolyClient;

mod config;
mod metrics;
mod preflight;
mod reporter;
mod runner;
mod scratch;

use config::Config;
use reporter::csv_reporter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let config = Config::parse();

    println!("poly-bench {}", env!("CARGO_PKG_VERSION"));
    println!("  Server:     {}", config.connection());
    println!("  Iterations: {}", config.iterations);
    println!("  Warmup:     {}", config.warmup);
    println!("  Output:     {}", config.output);
    println!("  Started:    {}", chrono::Utc::now().to_rfc3339());
    println!();

    if let Err(err) = run(&config).await {
        eprintln!("Benchmark failed: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    let client = PolyClient::connect(&config.connection()).await?;

    if !config.skip_preflight {
        let checks = preflight::run_checks(&client).await;
        for check in &checks {
            println!("{}", check.display());
        }
        if !preflight::all_passed(&checks) {
            let _ = client.close().await;
            anyhow::bail!("pre-flight checks failed");
        }
        println!();
    }

    let outcome = runner::run(&client, config).await;
    if let Err(e) = client.close().await {
        debug!("connection close: {}", e);
    }
    let samples = outcome?;

    println!();
    println!("{}", metrics::summarize("insertQuery", &samples.insert_query)?);
    println!(
        "{}",
        metrics::summarize("insertProcedure", &samples.insert_procedure)?
    );

    csv_reporter::write_csv_report(&samples, Path::new(&config.output))?;
    println!();
    println!("Raw durations written to {}", config.output);

    Ok(())
}
