use super::Client;
use rfx_core::ID;
use rfx_gameroom::Input;
use rfx_gameroom::Run;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::oneshot;

/// Handle to communicate with a live run.
/// Stores channel endpoints for bridging a WebSocket to the room.
pub struct RunHandle {
    pub id: ID<Run>,
    /// Room inbox.
    pub remote: UnboundedSender<Input>,
    pub rx: Arc<Mutex<UnboundedReceiver<String>>>,
    pub start: Option<oneshot::Sender<()>>,
}

/// Channels for run lifecycle coordination.
pub struct RunChannels {
    pub handle: RunHandle,
    pub client: Client,
    pub start: oneshot::Receiver<()>,
    pub done_tx: oneshot::Sender<()>,
    pub done_rx: oneshot::Receiver<()>,
}

impl RunHandle {
    /// Creates paired channels for run communication.
    /// Returns channels for Arcade (handle, done_rx), Room (client, start, done_tx).
    pub fn pair(id: ID<Run>, remote: UnboundedSender<Input>) -> RunChannels {
        let (tx_outgoing, rx_outgoing) = unbounded_channel::<String>();
        let (start_tx, start_rx) = oneshot::channel();
        let (done_tx, done_rx) = oneshot::channel();
        let client = Client::new(tx_outgoing);
        let handle = RunHandle {
            id,
            remote,
            rx: Arc::new(Mutex::new(rx_outgoing)),
            start: Some(start_tx),
        };
        RunChannels {
            handle,
            client,
            start: start_rx,
            done_tx,
            done_rx,
        }
    }
}
