use super::*;
use rfx_hands::*;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    InvalidInput(String),
    InvalidSlot(usize),
    MissingRound(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::InvalidSlot(n) => write!(f, "invalid slot: {}", n),
            Self::MissingRound(s) => write!(f, "expected <round>:<choice>, got {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Handles Event to ServerMessage conversion and input parsing.
/// Centralizes the protocol layer between internal events and wire format.
pub struct Protocol;

impl Protocol {
    pub fn encode(event: &Event) -> ServerMessage {
        match event {
            Event::Connected { run } => ServerMessage::connected(*run),
            Event::Round(round) => ServerMessage::round(
                round.number(),
                round.stage(),
                round.cpu(),
                round.offer(),
                round.duration().as_millis() as u64,
            ),
            Event::Result { win, stage } => ServerMessage::result(*win, *stage),
            Event::GameOver { stage } => ServerMessage::game_over(*stage),
            Event::Notice(notice) => {
                ServerMessage::notice(matches!(notice, Notice::Saved(_)), notice.to_string())
            }
        }
    }

    /// Parses a client frame of the form `<round>:<choice>`.
    ///
    /// The round is the number from the `round` message being answered.
    /// The choice is a slot index (`0`..`2`), an arrow direction
    /// (`left`, `down`, `right`), or a hand by name or emoji.
    pub fn decode(text: &str) -> Result<Input, ProtocolError> {
        let text = text.trim();
        let missing = || ProtocolError::MissingRound(text.to_string());
        let (round, choice) = text.split_once(':').ok_or_else(missing)?;
        let round = round.trim().parse::<u64>().map_err(|_| missing())?;
        Self::choice(choice).map(|choice| Input::new(round, choice))
    }

    fn choice(text: &str) -> Result<Choice, ProtocolError> {
        let text = text.trim();
        match text.to_lowercase().as_str() {
            "left" | "arrowleft" => return Ok(Choice::Slot(0)),
            "down" | "arrowdown" => return Ok(Choice::Slot(1)),
            "right" | "arrowright" => return Ok(Choice::Slot(2)),
            _ => {}
        }
        if let Ok(slot) = text.parse::<usize>() {
            return match slot {
                0..=2 => Ok(Choice::Slot(slot)),
                n => Err(ProtocolError::InvalidSlot(n)),
            };
        }
        Hand::try_from(text)
            .map(Choice::Hand)
            .map_err(ProtocolError::InvalidInput)
    }
}
