use super::*;
use rfx_core::Stage;
use rfx_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;

/// Leaderboard backed by the `rankings` table.
///
/// The upsert's `WHERE` clause makes check-then-act a single statement,
/// and `achieved` comes from a sequence, so stamps are strictly increasing
/// across every client of the database.
#[derive(Clone)]
pub struct Postgres(Arc<Client>);

impl Postgres {
    pub fn new(client: Arc<Client>) -> Self {
        Self(client)
    }
    /// Creates the table, sequence, and ordering index if missing.
    pub async fn migrate(&self) -> Result<(), LeaderboardError> {
        rfx_pg::migrate::<Self>(&self.0).await.map_err(unavailable)
    }
    /// Cheap liveness probe.
    pub async fn ping(&self) -> Result<(), LeaderboardError> {
        self.0.execute("SELECT 1", &[]).await.map(|_| ()).map_err(unavailable)
    }
}

#[async_trait::async_trait]
impl Leaderboard for Postgres {
    async fn submit(&self, name: &str, score: Stage) -> Result<Submission, LeaderboardError> {
        if name.is_empty() || score == 0 {
            return Ok(Submission::Ignored);
        }
        self.0.query_opt(
            const_format::concatcp!(
                "INSERT INTO ",
                RANKINGS,
                " (name, score) VALUES ($1, $2)
                 ON CONFLICT (name) DO UPDATE
                    SET score = EXCLUDED.score, achieved = EXCLUDED.achieved
                    WHERE ",
                RANKINGS,
                ".score < EXCLUDED.score
                 RETURNING (xmax = 0) AS inserted"
            ),
            &[&name, &(score as i32)],
        )
        .await
        .map(|opt| match opt.map(|row| row.get::<_, bool>(0)) {
            Some(true) => Submission::Created,
            Some(false) => Submission::Improved,
            None => Submission::Unchanged,
        })
        .map_err(unavailable)
    }
    async fn top(&self, n: usize) -> Result<Vec<Entry>, LeaderboardError> {
        self.0.query(
            const_format::concatcp!(
                "SELECT name, score, achieved FROM ",
                RANKINGS,
                " ORDER BY score DESC, achieved DESC, name ASC LIMIT $1"
            ),
            &[&(n.min(i64::MAX as usize) as i64)],
        )
        .await
        .map(|rows| rows.iter().map(entry).collect())
        .map_err(unavailable)
    }
    async fn rank(&self, name: &str) -> Result<Ranking, LeaderboardError> {
        self.0.query_opt(
            const_format::concatcp!(
                "SELECT r.name, r.score, r.achieved, 1 + (
                    SELECT COUNT(*) FROM ",
                RANKINGS,
                " o WHERE o.score > r.score
                       OR (o.score = r.score AND o.achieved > r.achieved)
                       OR (o.score = r.score AND o.achieved = r.achieved AND o.name < r.name)
                 ) FROM ",
                RANKINGS,
                " r WHERE r.name = $1"
            ),
            &[&name],
        )
        .await
        .map_err(unavailable)?
        .map(|row| Ranking {
            rank: row.get::<_, i64>(3) as usize,
            entry: entry(&row),
        })
        .ok_or_else(|| LeaderboardError::NotFound(name.to_string()))
    }
}

fn entry(row: &Row) -> Entry {
    Entry::new(
        row.get::<_, String>(0),
        row.get::<_, i32>(1) as Stage,
        row.get::<_, i64>(2) as Stamp,
    )
}

fn unavailable(e: PgErr) -> LeaderboardError {
    log::warn!("[leaderboard] database error: {}", e);
    LeaderboardError::Unavailable(e.to_string())
}

impl Schema for Postgres {
    fn name() -> &'static str {
        RANKINGS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE SEQUENCE IF NOT EXISTS ",
            RANKINGS_SEQ,
            ";
             CREATE TABLE IF NOT EXISTS ",
            RANKINGS,
            " (
                name        VARCHAR(32) PRIMARY KEY,
                score       INTEGER NOT NULL CHECK (score > 0),
                achieved    BIGINT NOT NULL DEFAULT nextval('",
            RANKINGS_SEQ,
            "')
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_rankings_order ON ",
            RANKINGS,
            " (score DESC, achieved DESC, name ASC);"
        )
    }
}
