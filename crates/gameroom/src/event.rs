use super::*;
use rfx_core::*;
use rfx_hands::*;
use rfx_leaderboard::*;

/// What the player chose, before it is bound to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// A hand named directly.
    Hand(Hand),
    /// A position in the offered row.
    Slot(Slot),
}

impl From<Hand> for Choice {
    fn from(hand: Hand) -> Self {
        Self::Hand(hand)
    }
}

/// Player input delivered to a room's inbox.
///
/// Every input names the round it answers. Input for any round other
/// than the open one is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    pub round: u64,
    pub choice: Choice,
}

impl Input {
    pub fn new(round: u64, choice: impl Into<Choice>) -> Self {
        Self {
            round,
            choice: choice.into(),
        }
    }
    pub fn hand(round: u64, hand: Hand) -> Self {
        Self::new(round, Choice::Hand(hand))
    }
    pub fn slot(round: u64, slot: Slot) -> Self {
        Self::new(round, Choice::Slot(slot))
    }
}

/// Out-of-band message about the run's bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The final stage reached the leaderboard.
    Saved(Submission),
    /// The final stage could not be recorded.
    Unsaved(String),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saved(Submission::Created) => write!(f, "first score recorded"),
            Self::Saved(Submission::Improved) => write!(f, "new personal best"),
            Self::Saved(Submission::Unchanged) => write!(f, "personal best unchanged"),
            Self::Saved(Submission::Ignored) => write!(f, "nothing to record"),
            Self::Unsaved(reason) => write!(f, "score not saved: {}", reason),
        }
    }
}

/// Everything a room shows its presenter, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Connected { run: ID<Run> },
    Round(Round),
    Result { win: bool, stage: Stage },
    GameOver { stage: Stage },
    Notice(Notice),
}
