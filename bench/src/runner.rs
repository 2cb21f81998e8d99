//! Setup → warmup → timed iterations → teardown.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use poly_link::PolyClient;
use tracing::{info, warn};

use crate::config::Config;
use crate::scratch::ScratchSchema;

/// Raw durations collected by one run, one series per operation kind.
#[derive(Debug, Clone, Default)]
pub struct BenchSamples {
    pub insert_query: Vec<Duration>,
    pub insert_procedure: Vec<Duration>,
}

/// Drive a full benchmark run. The scratch objects are dropped on every exit
/// path: on a measurement failure teardown still runs before the error
/// propagates, so a failed run does not leave the table or procedure behind.
pub async fn run(client: &PolyClient, config: &Config) -> Result<BenchSamples> {
    let scratch = ScratchSchema::new(&config.table, &config.procedure);

    setup(client, &scratch).await?;

    match measure(client, &scratch, config).await {
        Ok(samples) => {
            teardown(client, &scratch).await?;
            Ok(samples)
        }
        Err(err) => {
            if let Err(td) = teardown(client, &scratch).await {
                warn!("teardown after failed run: {:#}", td);
            }
            Err(err)
        }
    }
}

/// Create the scratch table and procedure, then smoke-probe the DML shapes
/// the measurement loop will issue.
async fn setup(client: &PolyClient, scratch: &ScratchSchema) -> Result<()> {
    info!("creating scratch table {}", scratch.table());
    client
        .execute(&scratch.create_table())
        .await
        .context("CREATE TABLE failed")?;

    info!("creating procedure {}", scratch.procedure());
    if let Err(e) = client.execute(&scratch.create_procedure()).await {
        let _ = client.execute(&scratch.drop_table()).await;
        return Err(e).context("CREATE PROCEDURE failed");
    }

    if let Err(e) = dml_probe(client, scratch).await {
        if let Err(td) = teardown(client, scratch).await {
            warn!("teardown after failed probe: {:#}", td);
        }
        return Err(e);
    }

    Ok(())
}

/// One insert → update → delete cycle on the fresh scratch table.
async fn dml_probe(client: &PolyClient, scratch: &ScratchSchema) -> Result<()> {
    client
        .execute(&scratch.raw_insert())
        .await
        .context("probe INSERT failed")?;
    client
        .execute(&scratch.update_probe())
        .await
        .context("probe UPDATE failed")?;
    client
        .execute(&scratch.clear_rows())
        .await
        .context("probe DELETE failed")?;
    Ok(())
}

async fn measure(
    client: &PolyClient,
    scratch: &ScratchSchema,
    config: &Config,
) -> Result<BenchSamples> {
    let raw_insert = scratch.raw_insert();
    let exec_procedure = scratch.exec_procedure();
    let clear_rows = scratch.clear_rows();

    if config.warmup > 0 {
        info!("warmup: {} untimed iterations", config.warmup);
        for _ in 0..config.warmup {
            client.execute(&raw_insert).await.context("warmup INSERT failed")?;
            client
                .execute(&exec_procedure)
                .await
                .context("warmup EXEC PROCEDURE failed")?;
            client.execute(&clear_rows).await.context("warmup reset failed")?;
        }
    }

    info!("measuring {} iterations", config.iterations);
    let mut samples = BenchSamples {
        insert_query: Vec::with_capacity(config.iterations as usize),
        insert_procedure: Vec::with_capacity(config.iterations as usize),
    };

    for iteration in 0..config.iterations {
        let started = Instant::now();
        client
            .execute(&raw_insert)
            .await
            .with_context(|| format!("raw INSERT failed at iteration {}", iteration))?;
        samples.insert_query.push(started.elapsed());

        let started = Instant::now();
        client
            .execute(&exec_procedure)
            .await
            .with_context(|| format!("EXEC PROCEDURE failed at iteration {}", iteration))?;
        samples.insert_procedure.push(started.elapsed());

        // Untimed: keep the primary key satisfied for the next pair.
        client
            .execute(&clear_rows)
            .await
            .with_context(|| format!("row reset failed at iteration {}", iteration))?;
    }

    Ok(samples)
}

/// Drop the procedure, then the table, in that order.
async fn teardown(client: &PolyClient, scratch: &ScratchSchema) -> Result<()> {
    info!("dropping procedure {}", scratch.procedure());
    client
        .execute(&scratch.drop_procedure())
        .await
        .context("DROP PROCEDURE failed")?;
    info!("dropping table {}", scratch.table());
    client
        .execute(&scratch.drop_table())
        .await
        .context("DROP TABLE failed")?;
    Ok(())
}
