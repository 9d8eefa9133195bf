use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rfx_core::*;
use rfx_leaderboard::*;
use rfx_stamina::Gate;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use tokio::time::Instant;

/// What a finished room hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: ID<Run>,
    pub name: Option<Name>,
    pub stage: Stage,
    /// None when the run never started.
    pub submission: Option<Result<Submission, LeaderboardError>>,
}

/// Async driver for one run.
///
/// Player input and round deadlines race in a single `select!`, so a
/// round is closed by exactly one of them. After a loss or timeout the
/// final stage is submitted to the leaderboard once; a failed submit is
/// reported to the presenter and never retried.
pub struct Room {
    run: Run,
    inbox: Channel<Input>,
    leaderboard: Arc<dyn Leaderboard>,
    rng: SmallRng,
    cursor: watch::Sender<u64>,
}

impl Room {
    pub fn new(config: RunConfig, leaderboard: Arc<dyn Leaderboard>) -> Self {
        Self {
            run: Run::new(config),
            inbox: Channel::default(),
            leaderboard,
            rng: SmallRng::from_rng(&mut rand::rng()),
            cursor: watch::channel(0).0,
        }
    }
    /// Fixes the hand and offer sequence.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }
    pub fn id(&self) -> ID<Run> {
        self.run.id()
    }
    pub fn run(&self) -> &Run {
        &self.run
    }
    /// Sender for player input. Clones are cheap and may outlive the room.
    pub fn remote(&self) -> UnboundedSender<Input> {
        self.inbox.tx().clone()
    }
    /// Number of the most recently opened round, 0 before the first.
    /// Lets untagged sources such as a keyboard bind input to a round.
    pub fn cursor(&self) -> watch::Receiver<u64> {
        self.cursor.subscribe()
    }
    pub fn start(&mut self, name: &str, gate: &dyn Gate) -> Result<(), RunError> {
        self.run.start(name, gate)
    }

    /// Plays rounds until the run ends, then records the result.
    pub async fn play<P: Presenter>(mut self, mut presenter: P) -> Summary {
        log::debug!("[room {}] playing", self.id());
        loop {
            self.inbox.drain();
            let Some(round) = self.run.begin_round(&mut self.rng, Instant::now()) else {
                break;
            };
            self.cursor.send_replace(round.number());
            log::trace!("[room {}] {}", self.id(), round);
            presenter.show_round(&round).await;
            let resolution = self.resolve(&round).await;
            presenter.report_result(resolution.is_win(), resolution.stage()).await;
            match resolution {
                Resolution::Win { .. } => {
                    tokio::time::sleep(self.run.config().timer.grace).await;
                }
                Resolution::Loss { stage } | Resolution::Timeout { stage } => {
                    presenter.report_game_over(stage).await;
                    break;
                }
            }
        }
        self.conclude(&mut presenter).await
    }

    async fn resolve(&mut self, round: &Round) -> Resolution {
        let deadline = round.deadline();
        loop {
            tokio::select! {
                biased;
                Some(input) = self.inbox.rx().recv() => {
                    match self.run.apply(input, Instant::now()) {
                        Some(resolution) => return resolution,
                        None => log::trace!("[room {}] ignored input for round {}", self.id(), input.round),
                    }
                }
                _ = tokio::time::sleep_until(deadline) => {
                    return self
                        .run
                        .expire(round.number())
                        .unwrap_or(Resolution::Timeout { stage: round.stage() });
                }
            }
        }
    }

    async fn conclude<P: Presenter>(self, presenter: &mut P) -> Summary {
        let id = self.id();
        let stage = self.run.stage();
        let submission = match self.run.name().filter(|_| self.run.is_over()) {
            None => None,
            Some(name) => {
                let result = self.record(name, stage).await;
                let notice = match &result {
                    Ok(submission) => Notice::Saved(*submission),
                    Err(e) => {
                        log::warn!("[room {}] score not saved: {}", id, e);
                        Notice::Unsaved(e.to_string())
                    }
                };
                presenter.report_notice(&notice).await;
                Some(result)
            }
        };
        log::debug!("[room {}] finished at stage {}", id, stage);
        Summary {
            id,
            name: self.run.name().cloned(),
            stage,
            submission,
        }
    }

    async fn record(&self, name: &Name, stage: Stage) -> Result<Submission, LeaderboardError> {
        let limit = self.run.config().submit_timeout;
        tokio::time::timeout(limit, self.leaderboard.submit(name.as_str(), stage))
            .await
            .unwrap_or_else(|_| Err(LeaderboardError::Unavailable("submit timed out".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfx_hands::*;
    use rfx_stamina::Unlimited;
    use std::time::Duration;

    /// How a scripted player answers one round.
    #[derive(Clone, Copy)]
    enum Move {
        Right,
        Wrong,
        Slot,
        Late(u64),
        /// Right answer now, and the same answer again after the delay.
        Twice(u64),
        Silent,
    }

    /// Plays a fixed script, then goes silent.
    struct Script {
        remote: UnboundedSender<Input>,
        moves: std::vec::IntoIter<Move>,
        log: Transcript,
    }

    impl Script {
        fn new(room: &Room, moves: Vec<Move>) -> Self {
            Self {
                remote: room.remote(),
                moves: moves.into_iter(),
                log: Transcript::default(),
            }
        }
        fn later(&self, ms: u64, input: Input) {
            let remote = self.remote.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                let _ = remote.send(input);
            });
        }
    }

    #[async_trait::async_trait]
    impl Presenter for Script {
        async fn show_round(&mut self, round: &Round) {
            self.log.show_round(round).await;
            let n = round.number();
            let input = match self.moves.next().unwrap_or(Move::Silent) {
                Move::Right => Input::hand(n, round.answer()),
                Move::Wrong => Input::hand(n, round.cpu()),
                Move::Slot => Input::slot(n, round.offer().slot(round.answer())),
                Move::Late(ms) => {
                    self.later(ms, Input::hand(n, round.answer()));
                    return;
                }
                Move::Twice(ms) => {
                    let input = Input::hand(n, round.answer());
                    self.later(ms, input);
                    input
                }
                Move::Silent => return,
            };
            self.remote.send(input).unwrap();
        }
        async fn report_result(&mut self, win: bool, stage: Stage) {
            self.log.report_result(win, stage).await;
        }
        async fn report_game_over(&mut self, stage: Stage) {
            self.log.report_game_over(stage).await;
        }
        async fn report_notice(&mut self, notice: &Notice) {
            self.log.report_notice(notice).await;
        }
    }

    /// Store that always fails.
    struct Broken;
    #[async_trait::async_trait]
    impl Leaderboard for Broken {
        async fn submit(&self, _: &str, _: Stage) -> Result<Submission, LeaderboardError> {
            Err(LeaderboardError::Unavailable("down".into()))
        }
        async fn top(&self, _: usize) -> Result<Vec<Entry>, LeaderboardError> {
            Err(LeaderboardError::Unavailable("down".into()))
        }
        async fn rank(&self, name: &str) -> Result<Ranking, LeaderboardError> {
            Err(LeaderboardError::NotFound(name.into()))
        }
    }

    /// Store that never answers a submit.
    struct Hung;
    #[async_trait::async_trait]
    impl Leaderboard for Hung {
        async fn submit(&self, _: &str, _: Stage) -> Result<Submission, LeaderboardError> {
            std::future::pending().await
        }
        async fn top(&self, _: usize) -> Result<Vec<Entry>, LeaderboardError> {
            Ok(vec![])
        }
        async fn rank(&self, name: &str) -> Result<Ranking, LeaderboardError> {
            Err(LeaderboardError::NotFound(name.into()))
        }
    }

    fn room(board: Arc<dyn Leaderboard>) -> Room {
        let mut room = Room::new(RunConfig::default(), board).seeded(7);
        room.start("Kim", &Unlimited).unwrap();
        room
    }

    #[tokio::test(start_paused = true)]
    async fn kim_times_out_at_stage_five() {
        let board = Arc::new(Memory::new());
        let room = room(board.clone());
        let mut script = Script::new(&room, vec![Move::Right; 4]);
        let t0 = Instant::now();
        let summary = room.play(&mut script).await;
        assert_eq!(summary.stage, 5);
        assert_eq!(summary.submission, Some(Ok(Submission::Created)));
        assert_eq!(board.rank("Kim").await.unwrap().entry.best(), 5);
        let events = script.log.events();
        assert_eq!(events.iter().filter(|e| matches!(e, Event::Round(_))).count(), 5);
        assert!(events.contains(&Event::Result { win: false, stage: 5 }));
        assert!(events.contains(&Event::GameOver { stage: 5 }));
        // four grace pauses, then the full stage 5 countdown
        let elapsed = t0.elapsed();
        assert!(elapsed >= Duration::from_millis(4 * 300 + 4400));
        assert!(elapsed < Duration::from_millis(4 * 300 + 4400 + 10));
    }

    #[tokio::test(start_paused = true)]
    async fn rounds_tighten_with_stage() {
        let room = room(Arc::new(Memory::new()));
        let mut script = Script::new(&room, vec![Move::Right; 9]);
        room.play(&mut script).await;
        let durations = script
            .log
            .rounds()
            .map(|r| r.duration().as_millis())
            .collect::<Vec<_>>();
        assert_eq!(durations[0], 5000);
        assert_eq!(durations[9], 3650);
        assert!(durations.windows(2).all(|w| w[1] <= w[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_hand_loses_immediately() {
        let room = room(Arc::new(Memory::new()));
        let mut script = Script::new(&room, vec![Move::Right, Move::Wrong]);
        let t0 = Instant::now();
        let summary = room.play(&mut script).await;
        assert_eq!(summary.stage, 2);
        assert!(t0.elapsed() >= Duration::from_millis(300));
        assert!(t0.elapsed() < Duration::from_millis(310));
        assert_eq!(
            script.log.events().last(),
            Some(&Event::Notice(Notice::Saved(Submission::Created)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn slot_input_counts() {
        let room = room(Arc::new(Memory::new()));
        let mut script = Script::new(&room, vec![Move::Slot, Move::Slot, Move::Wrong]);
        assert_eq!(room.play(&mut script).await.stage, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn answer_inside_window_wins() {
        let room = room(Arc::new(Memory::new()));
        let mut script = Script::new(&room, vec![Move::Late(4999), Move::Wrong]);
        assert_eq!(room.play(&mut script).await.stage, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn answer_at_deadline_times_out() {
        let room = room(Arc::new(Memory::new()));
        let mut script = Script::new(&room, vec![Move::Late(5000)]);
        let summary = room.play(&mut script).await;
        assert_eq!(summary.stage, 1);
        let results = script
            .log
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Result { .. }))
            .count();
        assert_eq!(results, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn broken_store_keeps_result() {
        let room = room(Arc::new(Broken));
        let mut script = Script::new(&room, vec![Move::Right, Move::Right]);
        let summary = room.play(&mut script).await;
        assert_eq!(summary.stage, 3);
        assert!(matches!(
            summary.submission,
            Some(Err(LeaderboardError::Unavailable(_)))
        ));
        assert!(
            script
                .log
                .events()
                .iter()
                .any(|e| matches!(e, Event::Notice(Notice::Unsaved(_))))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn hung_store_is_abandoned() {
        let room = room(Arc::new(Hung));
        let mut script = Script::new(&room, vec![Move::Wrong]);
        let summary = room.play(&mut script).await;
        assert_eq!(summary.stage, 1);
        assert!(matches!(summary.submission, Some(Err(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn unstarted_room_records_nothing() {
        let board = Arc::new(Memory::new());
        let room = Room::new(RunConfig::default(), board.clone());
        let summary = room.play(Transcript::default()).await;
        assert_eq!(summary.submission, None);
        assert!(board.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn input_during_grace_is_dropped() {
        let room = room(Arc::new(Memory::new()));
        let remote = room.remote();
        let mut script = Script::new(&room, vec![Move::Right, Move::Silent]);
        let spam = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Hand::ALL.into_iter().for_each(|h| {
                let _ = remote.send(Input::hand(1, h));
            });
        });
        let summary = room.play(&mut script).await;
        spam.await.unwrap();
        assert_eq!(summary.stage, 2);
        assert!(
            script
                .log
                .events()
                .contains(&Event::Result { win: false, stage: 2 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_answer_cannot_resolve_next_round() {
        for seed in 0..20 {
            let mut room = Room::new(RunConfig::default(), Arc::new(Memory::new())).seeded(seed);
            room.start("Kim", &Unlimited).unwrap();
            let mut script = Script::new(&room, vec![Move::Twice(350), Move::Silent]);
            let t0 = Instant::now();
            let summary = room.play(&mut script).await;
            assert_eq!(summary.stage, 2);
            let results = script
                .log
                .events()
                .iter()
                .filter(|e| matches!(e, Event::Result { .. }))
                .cloned()
                .collect::<Vec<_>>();
            assert_eq!(
                results,
                vec![
                    Event::Result { win: true, stage: 2 },
                    Event::Result { win: false, stage: 2 },
                ]
            );
            assert!(t0.elapsed() >= Duration::from_millis(300 + 4850));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cursor_follows_open_round() {
        let room = room(Arc::new(Memory::new()));
        let cursor = room.cursor();
        assert_eq!(*cursor.borrow(), 0);
        let mut script = Script::new(&room, vec![Move::Right, Move::Right]);
        room.play(&mut script).await;
        assert_eq!(*cursor.borrow(), 3);
    }
}
