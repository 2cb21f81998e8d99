//! Client-driver wrapper for Polypheny.
//!
//! The tools in this workspace ship raw SQL text to a running Polypheny
//! server and read back at most one row at a time. This crate wraps the
//! `tokio-postgres` driver (Polypheny speaks the PostgreSQL wire protocol
//! through its postgresql interface) behind that narrow surface: connect,
//! execute a statement, fetch one row, close.
//!
//! Statements travel over the simple-query protocol, so every call is a
//! single autocommitted round trip — there is no prepared-statement cache,
//! no pipelining and no pooling.

mod client;
mod conninfo;
mod error;
mod models;

pub use client::PolyClient;
pub use conninfo::ConnectionInfo;
pub use error::{PolyLinkError, Result};
pub use models::SqlRow;
