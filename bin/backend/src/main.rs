//! Reflex Backend Binary
//!
//! Hosts live runs and the shared leaderboard.
//! Runs on BIND_ADDR (default 0.0.0.0:8888); persists to DB_URL when set.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rfx_core::log();
    rfx_core::kys();
    rfx_server::run().await
}
