use super::*;
use rfx_core::*;

/// Front end of a run.
///
/// Presenters render what the room decides and never resolve rounds
/// themselves: input travels back through the room's inbox, obtained
/// from [`Room::remote`]. Calls arrive strictly in order and are awaited,
/// so a slow presenter delays the next round but not the countdown of
/// the current one.
#[async_trait::async_trait]
pub trait Presenter: Send {
    /// A new round is open and its countdown has started.
    async fn show_round(&mut self, round: &Round);
    /// The open round closed. `stage` is the stage now current.
    async fn report_result(&mut self, win: bool, stage: Stage);
    /// The run ended at `stage`.
    async fn report_game_over(&mut self, stage: Stage);
    async fn report_notice(&mut self, _: &Notice) {}
}

#[async_trait::async_trait]
impl<P: Presenter + ?Sized> Presenter for Box<P> {
    async fn show_round(&mut self, round: &Round) {
        (**self).show_round(round).await
    }
    async fn report_result(&mut self, win: bool, stage: Stage) {
        (**self).report_result(win, stage).await
    }
    async fn report_game_over(&mut self, stage: Stage) {
        (**self).report_game_over(stage).await
    }
    async fn report_notice(&mut self, notice: &Notice) {
        (**self).report_notice(notice).await
    }
}

#[async_trait::async_trait]
impl<P: Presenter + ?Sized> Presenter for &mut P {
    async fn show_round(&mut self, round: &Round) {
        (**self).show_round(round).await
    }
    async fn report_result(&mut self, win: bool, stage: Stage) {
        (**self).report_result(win, stage).await
    }
    async fn report_game_over(&mut self, stage: Stage) {
        (**self).report_game_over(stage).await
    }
    async fn report_notice(&mut self, notice: &Notice) {
        (**self).report_notice(notice).await
    }
}

/// Presenter that records every call. Useful for replays and tests.
#[derive(Debug, Default)]
pub struct Transcript(Vec<Event>);

impl Transcript {
    pub fn events(&self) -> &[Event] {
        &self.0
    }
    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        self.0.iter().filter_map(|e| match e {
            Event::Round(round) => Some(round),
            _ => None,
        })
    }
}

#[async_trait::async_trait]
impl Presenter for Transcript {
    async fn show_round(&mut self, round: &Round) {
        self.0.push(Event::Round(*round));
    }
    async fn report_result(&mut self, win: bool, stage: Stage) {
        self.0.push(Event::Result { win, stage });
    }
    async fn report_game_over(&mut self, stage: Stage) {
        self.0.push(Event::GameOver { stage });
    }
    async fn report_notice(&mut self, notice: &Notice) {
        self.0.push(Event::Notice(notice.clone()));
    }
}
