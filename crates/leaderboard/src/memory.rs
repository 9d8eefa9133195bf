use super::*;
use rfx_core::Millis;
use rfx_core::Stage;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;

/// In-process leaderboard.
///
/// A unique-by-name index plus a separately maintained ordered set.
/// All writes take the single write lock, so check-then-act is atomic.
pub struct Memory {
    book: RwLock<Book>,
    clock: fn() -> Millis,
}

#[derive(Default)]
struct Book {
    index: HashMap<String, Entry>,
    order: BTreeSet<Entry>,
    last: Stamp,
}

impl Book {
    /// Wall clock, nudged forward so stamps never repeat.
    fn stamp(&mut self, now: Millis) -> Stamp {
        self.last = now.max(self.last + 1);
        self.last
    }
    fn put(&mut self, entry: Entry) {
        if let Some(old) = self.index.insert(entry.name().to_string(), entry.clone()) {
            self.order.remove(&old);
        }
        self.order.insert(entry);
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::with_clock(rfx_core::now)
    }
    pub fn with_clock(clock: fn() -> Millis) -> Self {
        Self {
            book: RwLock::new(Book::default()),
            clock,
        }
    }
    pub fn len(&self) -> usize {
        self.book
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .index
            .len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Leaderboard for Memory {
    async fn submit(&self, name: &str, score: Stage) -> Result<Submission, LeaderboardError> {
        if name.is_empty() || score == 0 {
            return Ok(Submission::Ignored);
        }
        let mut book = self.book.write().unwrap_or_else(PoisonError::into_inner);
        let outcome = match book.index.get(name).map(Entry::best) {
            Some(best) if score <= best => return Ok(Submission::Unchanged),
            Some(_) => Submission::Improved,
            None => Submission::Created,
        };
        let stamp = book.stamp((self.clock)());
        book.put(Entry::new(name.to_string(), score, stamp));
        log::debug!("[leaderboard] {} -> {} ({:?})", name, score, outcome);
        Ok(outcome)
    }
    async fn top(&self, n: usize) -> Result<Vec<Entry>, LeaderboardError> {
        Ok(self
            .book
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .iter()
            .take(n)
            .cloned()
            .collect())
    }
    async fn rank(&self, name: &str) -> Result<Ranking, LeaderboardError> {
        let book = self.book.read().unwrap_or_else(PoisonError::into_inner);
        let entry = book
            .index
            .get(name)
            .cloned()
            .ok_or_else(|| LeaderboardError::NotFound(name.to_string()))?;
        let rank = book.order.range(..&entry).count() + 1;
        Ok(Ranking { rank, entry })
    }
}
