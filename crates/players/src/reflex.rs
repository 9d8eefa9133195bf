use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rfx_core::*;
use rfx_gameroom::*;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// CPU player that reacts after a fixed delay.
///
/// Picks the winning slot with probability `accuracy`, otherwise the
/// slot holding the CPU's own hand. A latency longer than the round's
/// countdown makes it time out, which is how it eventually loses as
/// stages tighten.
pub struct Reflex {
    remote: UnboundedSender<Input>,
    latency: Duration,
    accuracy: f64,
    rng: SmallRng,
}

impl Reflex {
    pub fn new(remote: UnboundedSender<Input>) -> Self {
        Self {
            remote,
            latency: Duration::from_millis(250),
            accuracy: 1.0,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy.clamp(0.0, 1.0);
        self
    }
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }
}

#[async_trait::async_trait]
impl Presenter for Reflex {
    async fn show_round(&mut self, round: &Round) {
        let hand = if self.rng.random_bool(self.accuracy) {
            round.answer()
        } else {
            round.cpu()
        };
        let input = Input::slot(round.number(), round.offer().slot(hand));
        let remote = self.remote.clone();
        let latency = self.latency;
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let _ = remote.send(input);
        });
    }
    async fn report_result(&mut self, win: bool, stage: Stage) {
        log::trace!("[reflex] {} -> stage {}", if win { "win" } else { "miss" }, stage);
    }
    async fn report_game_over(&mut self, stage: Stage) {
        log::debug!("[reflex] finished at stage {}", stage);
    }
}
