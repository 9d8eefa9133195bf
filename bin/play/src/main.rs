//! Reflex Terminal Binary
//!
//! Plays timed runs at the keyboard against a persistent stamina pool.
//! Scores go to PostgreSQL when DB_URL is set, otherwise to a
//! leaderboard that lasts for this session.

mod args;
mod session;

use args::Args;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    rfx_core::quiet();
    rfx_core::kys();
    session::Session::open(args).await?.run().await
}
