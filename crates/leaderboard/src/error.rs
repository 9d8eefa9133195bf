/// Errors that can occur during leaderboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardError {
    /// No entry exists for the name.
    NotFound(String),
    /// The backing store could not be reached or rejected the request.
    Unavailable(String),
}

impl std::fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "no ranking for {}", name),
            Self::Unavailable(s) => write!(f, "leaderboard unavailable: {}", s),
        }
    }
}

impl std::error::Error for LeaderboardError {}
