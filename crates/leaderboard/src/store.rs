use super::*;
use rfx_core::Stage;

/// Best-score store.
///
/// Implementations must make `submit` atomic per name: concurrent
/// submissions for one name leave the largest score stored, whatever
/// order they arrive in. Reads may run concurrently with writes.
#[async_trait::async_trait]
pub trait Leaderboard: Send + Sync {
    /// Records `score` for `name` if it beats the stored best.
    async fn submit(&self, name: &str, score: Stage) -> Result<Submission, LeaderboardError>;
    /// Highest-ranked entries first, at most `n`.
    async fn top(&self, n: usize) -> Result<Vec<Entry>, LeaderboardError>;
    /// 1-based rank of `name`, consistent with [`Leaderboard::top`].
    async fn rank(&self, name: &str) -> Result<Ranking, LeaderboardError>;
}

#[async_trait::async_trait]
impl<L: Leaderboard + ?Sized> Leaderboard for std::sync::Arc<L> {
    async fn submit(&self, name: &str, score: Stage) -> Result<Submission, LeaderboardError> {
        (**self).submit(name, score).await
    }
    async fn top(&self, n: usize) -> Result<Vec<Entry>, LeaderboardError> {
        (**self).top(n).await
    }
    async fn rank(&self, name: &str) -> Result<Ranking, LeaderboardError> {
        (**self).rank(name).await
    }
}
