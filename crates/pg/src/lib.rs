//! PostgreSQL integration.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a URL
//! - [`migrate()`] — Creates every table and index a [`Schema`] describes
//!
//! ## Table Names
//!
//! Constants for all persistent entities.
mod schema;

pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
/// The connection driver is spawned onto the current runtime.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// Runs the DDL for a schema type.
pub async fn migrate<S: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("migrating table ({})", S::name());
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await?;
    Ok(())
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for best scores, one row per player name.
#[rustfmt::skip]
pub const RANKINGS:      &str = "rankings";
/// Sequence that stamps ranking rows with a strictly increasing value.
#[rustfmt::skip]
pub const RANKINGS_SEQ:  &str = "rankings_achieved_seq";
