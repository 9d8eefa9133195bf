use rfx_core::Stage;
use std::cmp::Ordering;

/// Strictly increasing stamp assigned by the store when a best score lands.
pub type Stamp = u64;

/// A player's best score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Entry {
    name: String,
    best: Stage,
    achieved: Stamp,
}

impl Entry {
    pub fn new(name: String, best: Stage, achieved: Stamp) -> Self {
        Self {
            name,
            best,
            achieved,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn best(&self) -> Stage {
        self.best
    }
    pub fn achieved(&self) -> Stamp {
        self.achieved
    }
    /// True when `self` sorts strictly ahead of `other`.
    pub fn outranks(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }
}

/// Leaderboard order: the first element ranks highest.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .best
            .cmp(&self.best)
            .then_with(|| other.achieved.cmp(&self.achieved))
            .then_with(|| self.name.cmp(&other.name))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An entry and its position in the leaderboard order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Ranking {
    pub rank: usize,
    pub entry: Entry,
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}. {} ({} stage)",
            self.rank, self.entry.name, self.entry.best
        )
    }
}

/// Outcome of a submit against the stored record for that name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Submission {
    /// First score for this name.
    Created,
    /// Strictly better than the stored best.
    Improved,
    /// Not better than the stored best; nothing changed.
    Unchanged,
    /// Empty name or zero score; nothing changed.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn higher_score_first() {
        let a = Entry::new("a".into(), 9, 1);
        let b = Entry::new("b".into(), 5, 100);
        assert!(a.outranks(&b));
        assert!(!b.outranks(&a));
    }
    #[test]
    fn recent_wins_ties() {
        let old = Entry::new("old".into(), 5, 1);
        let new = Entry::new("new".into(), 5, 2);
        assert!(new.outranks(&old));
    }
    #[test]
    fn name_breaks_identical_stamps() {
        let a = Entry::new("amy".into(), 5, 7);
        let b = Entry::new("bob".into(), 5, 7);
        assert!(a.outranks(&b));
        assert!(!b.outranks(&a));
    }
    #[test]
    fn sorting_matches_rules() {
        let mut entries = vec![
            Entry::new("c".into(), 3, 10),
            Entry::new("a".into(), 7, 1),
            Entry::new("b".into(), 3, 20),
        ];
        entries.sort();
        let names = entries.iter().map(Entry::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
