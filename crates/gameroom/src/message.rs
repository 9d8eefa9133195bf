use rfx_core::*;
use rfx_hands::*;
use serde::Serialize;

/// Messages sent from server to client over WebSocket.
/// Per-round messages carry the round number so clients can
/// ignore stale results from a previous round.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Initial connection confirmation.
    Connected { run: String },
    /// A round is open and its countdown has started.
    Round {
        round: u64,
        stage: Stage,
        cpu: Hand,
        offered: [Hand; 3],
        duration_ms: u64,
    },
    /// The open round closed.
    Result { win: bool, stage: Stage },
    /// The run is over; `stage` is the final score.
    GameOver { stage: Stage },
    /// Leaderboard bookkeeping after the run.
    Notice { saved: bool, message: String },
    /// Client input that could not be understood.
    Rejected { reason: String },
}

impl ServerMessage {
    pub fn connected<T>(run: ID<T>) -> Self {
        Self::Connected {
            run: run.to_string(),
        }
    }
    pub fn round(round: u64, stage: Stage, cpu: Hand, offer: Offer, duration_ms: u64) -> Self {
        Self::Round {
            round,
            stage,
            cpu,
            offered: offer.hands(),
            duration_ms,
        }
    }
    pub fn result(win: bool, stage: Stage) -> Self {
        Self::Result { win, stage }
    }
    pub fn game_over(stage: Stage) -> Self {
        Self::GameOver { stage }
    }
    pub fn notice(saved: bool, message: String) -> Self {
        Self::Notice { saved, message }
    }
    pub fn rejected(reason: String) -> Self {
        Self::Rejected { reason }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
