use super::*;
use rfx_core::ID;
use rfx_gameroom::*;
use rfx_leaderboard::Leaderboard;
use rfx_stamina::Gate;
use rfx_stamina::Unlimited;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

type Remote = UnboundedSender<Input>;
type Rx = Arc<Mutex<UnboundedReceiver<String>>>;

/// Manages live runs and their lifecycles.
///
/// A run is created on start, waits for its socket, plays to the end,
/// and is removed from the registry once its room task returns.
pub struct Arcade {
    config: RunConfig,
    leaderboard: Arc<dyn Leaderboard>,
    gate: Arc<dyn Gate>,
    lobby: Duration,
    runs: RwLock<HashMap<ID<Run>, RunHandle>>,
}

impl Arcade {
    pub fn new(leaderboard: Arc<dyn Leaderboard>) -> Self {
        Self {
            config: RunConfig::default(),
            leaderboard,
            gate: Arc::new(Unlimited),
            lobby: Duration::from_secs(30),
            runs: RwLock::new(HashMap::new()),
        }
    }
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_gate(mut self, gate: Arc<dyn Gate>) -> Self {
        self.gate = gate;
        self
    }
    /// How long a started run waits for its socket before it is dropped.
    pub fn with_lobby(mut self, lobby: Duration) -> Self {
        self.lobby = lobby;
        self
    }
    pub fn leaderboard(&self) -> &Arc<dyn Leaderboard> {
        &self.leaderboard
    }
    pub async fn live(&self) -> usize {
        self.runs.read().await.len()
    }
}

impl Arcade {
    /// Validates the name, spends stamina, and opens a run for a socket client.
    /// Spawns the room task (waits for start signal) and returns the run ID.
    pub async fn start(self: &Arc<Self>, name: &str) -> Result<ID<Run>, RunError> {
        let mut room = Room::new(self.config, self.leaderboard.clone());
        room.start(name, self.gate.as_ref())?;
        let id = room.id();
        let channels = RunHandle::pair(id, room.remote());
        self.runs.write().await.insert(id, channels.handle);
        let lobby = self.lobby;
        let client = channels.client;
        let start = channels.start;
        let done_tx = channels.done_tx;
        tokio::spawn(async move {
            match tokio::time::timeout(lobby, start).await {
                Ok(Ok(())) => {
                    let summary = room.play(client).await;
                    log::info!(
                        "[arcade] run {} ended at stage {} ({:?})",
                        id,
                        summary.stage,
                        summary.submission
                    );
                }
                _ => log::info!("[arcade] run {} abandoned before connect", id),
            }
            let _ = done_tx.send(());
        });
        let arcade = self.clone();
        let done_rx = channels.done_rx;
        tokio::spawn(async move {
            let _ = done_rx.await;
            let _ = arcade.close(id).await;
            log::info!("[arcade] run {} cleaned up", id);
        });
        log::debug!("[arcade] created run {} for {}", id, name.trim());
        Ok(id)
    }
    /// Removes a run from the registry.
    /// The room keeps running until its deadline; only the socket route goes away.
    pub async fn close(&self, id: ID<Run>) -> anyhow::Result<()> {
        self.runs
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("run not found"))
    }
    /// Gets channel endpoints and start signal for WebSocket bridging.
    pub async fn channels(
        &self,
        id: ID<Run>,
    ) -> anyhow::Result<(Remote, Rx, Option<tokio::sync::oneshot::Sender<()>>)> {
        self.runs
            .write()
            .await
            .get_mut(&id)
            .map(|h| (h.remote.clone(), h.rx.clone(), h.start.take()))
            .ok_or_else(|| anyhow::anyhow!("run not found"))
    }
    /// Spawns WebSocket bridge between client and room channels.
    /// Sends start signal to the room when the first client connects.
    pub async fn bridge(
        &self,
        id: ID<Run>,
        mut session: actix_ws::Session,
        mut streams: actix_ws::MessageStream,
    ) -> anyhow::Result<()> {
        use futures::StreamExt;
        let (remote, rx, start) = self.channels(id).await?;
        session
            .text(Protocol::encode(&Event::Connected { run: id }).to_json())
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        start.map(|s| s.send(()));
        log::debug!("[bridge {}] connected", id);
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = async { rx.lock().await.recv().await } => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = streams.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => match Protocol::decode(&text) {
                            Ok(input) => if remote.send(input).is_err() { break 'sesh },
                            Err(e) => if session.text(ServerMessage::rejected(e.to_string()).to_json()).await.is_err() { break 'sesh },
                        },
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            let _ = session.close(None).await;
            log::debug!("[bridge {}] disconnected", id);
        });
        Ok(())
    }
}
