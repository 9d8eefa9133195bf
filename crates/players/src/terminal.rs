use rfx_core::*;
use rfx_gameroom::*;

/// Text front end for a human player.
///
/// Renders rounds and results to stdout. Input comes separately from a
/// [`crate::Keyboard`] forwarded into the room's inbox.
#[derive(Debug, Default)]
pub struct Terminal {
    best: Stage,
}

impl Terminal {
    pub fn new(best: Stage) -> Self {
        Self { best }
    }
}

#[async_trait::async_trait]
impl Presenter for Terminal {
    async fn show_round(&mut self, round: &Round) {
        let row = round
            .offer()
            .iter()
            .enumerate()
            .map(|(i, hand)| format!("[{}] {}", i + 1, hand))
            .collect::<Vec<_>>()
            .join("  ");
        println!(
            "\nStage {:<3} CPU {}   {}   ({:.1}s)",
            round.stage(),
            round.cpu(),
            row,
            round.duration().as_secs_f32()
        );
    }
    async fn report_result(&mut self, win: bool, stage: Stage) {
        match win {
            true => println!("  ✔ next: stage {}", stage),
            false => println!("  ✘"),
        }
    }
    async fn report_game_over(&mut self, stage: Stage) {
        println!("\nGame over at stage {}", stage);
        if stage > self.best {
            println!("New record! (previous {})", self.best);
            self.best = stage;
        }
    }
    async fn report_notice(&mut self, notice: &Notice) {
        println!("{}", notice);
    }
}
