//! The client handle the tools drive.

use tokio::task::JoinHandle;
use tokio_postgres::{NoTls, SimpleQueryMessage};
use tracing::debug;

use crate::conninfo::ConnectionInfo;
use crate::error::{PolyLinkError, Result};
use crate::models::SqlRow;

/// A live connection to a Polypheny server.
///
/// Owns both halves of the driver: the client handle and the spawned task
/// that drives the socket. Dropping the `PolyClient` drops the handle, which
/// ends the connection task, so the connection cannot outlive its owner even
/// on error paths. [`PolyClient::close`] does the same but waits for the
/// task to finish.
pub struct PolyClient {
    inner: tokio_postgres::Client,
    driver: JoinHandle<()>,
    target: String,
}

impl PolyClient {
    /// Connect to the given target and start the connection task.
    pub async fn connect(info: &ConnectionInfo) -> Result<Self> {
        let target = info.to_string();
        debug!("connecting to {}", target);

        let (inner, connection) =
            info.pg_config()
                .connect(NoTls)
                .await
                .map_err(|e| PolyLinkError::Connection {
                    target: target.clone(),
                    message: e.to_string(),
                })?;

        let task_target = target.clone();
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                debug!("connection task for {} ended: {}", task_target, e);
            }
        });

        Ok(Self {
            inner,
            driver,
            target,
        })
    }

    /// Ship one statement and return the number of rows it affected
    /// (0 for DDL).
    pub async fn execute(&self, sql: &str) -> Result<u64> {
        let messages = self.simple_query(sql).await?;
        let affected = messages
            .iter()
            .map(|m| match m {
                SimpleQueryMessage::CommandComplete(n) => *n,
                _ => 0,
            })
            .sum();
        Ok(affected)
    }

    /// Ship a query and return its first data row, if any.
    pub async fn fetch_one(&self, sql: &str) -> Result<Option<SqlRow>> {
        let messages = self.simple_query(sql).await?;
        for message in &messages {
            if let SimpleQueryMessage::Row(row) = message {
                return Ok(Some(SqlRow::from_simple(row)));
            }
        }
        Ok(None)
    }

    async fn simple_query(&self, sql: &str) -> Result<Vec<SimpleQueryMessage>> {
        debug!("executing: {}", sql);
        self.inner
            .simple_query(sql)
            .await
            .map_err(|e| PolyLinkError::Query(e.to_string()))
    }

    /// Close the connection and wait for the connection task to finish.
    pub async fn close(self) -> Result<()> {
        debug!("closing connection to {}", self.target);
        drop(self.inner);
        if let Err(e) = self.driver.await {
            debug!("connection task join: {}", e);
        }
        Ok(())
    }
}
