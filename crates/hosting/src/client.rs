use rfx_core::*;
use rfx_gameroom::Event;
use rfx_gameroom::Notice;
use rfx_gameroom::Presenter;
use rfx_gameroom::Protocol;
use rfx_gameroom::Round;
use rfx_gameroom::ServerMessage;
use tokio::sync::mpsc::UnboundedSender;

/// Network presenter that communicates via tokio channels.
///
/// Every room event is encoded to JSON and pushed to the socket bridge.
/// Input does not pass through here: the bridge decodes client text and
/// feeds the room's inbox directly. A closed socket is not an error;
/// the run keeps going and ends on its own deadline.
pub struct Client {
    tx: UnboundedSender<String>,
}

impl Client {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }
    fn send(&self, event: Event) {
        let _ = self.tx.send(Protocol::encode(&event).to_json());
    }
}

#[async_trait::async_trait]
impl Presenter for Client {
    async fn show_round(&mut self, round: &Round) {
        self.send(Event::Round(*round));
    }
    async fn report_result(&mut self, win: bool, stage: Stage) {
        self.send(Event::Result { win, stage });
    }
    async fn report_game_over(&mut self, stage: Stage) {
        self.send(Event::GameOver { stage });
    }
    async fn report_notice(&mut self, notice: &Notice) {
        self.send(Event::Notice(notice.clone()));
    }
}
