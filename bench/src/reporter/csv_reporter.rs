//! Raw-duration CSV output.
//!
//! The file holds exactly two records, one per operation kind:
//! `insertProcedure,d1,...,dN` then `insertQuery,d1,...,dN`, with every
//! duration in seconds.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::runner::BenchSamples;

pub fn write_csv_report(samples: &BenchSamples, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer
        .write_record(record("insertProcedure", &samples.insert_procedure))
        .context("failed to write insertProcedure record")?;
    writer
        .write_record(record("insertQuery", &samples.insert_query))
        .context("failed to write insertQuery record")?;

    writer.flush().context("failed to flush CSV")?;
    Ok(())
}

fn record(label: &str, durations: &[Duration]) -> Vec<String> {
    std::iter::once(label.to_string())
        .chain(durations.iter().map(|d| d.as_secs_f64().to_string()))
        .collect()
}
