use super::*;
use rand::Rng;
use rfx_core::*;
use rfx_hands::*;
use rfx_stamina::Gate;
use tokio::time::Instant;

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Idle,
    InProgress,
    Ended,
}

/// How an open round was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Correct counter in time. `stage` is the stage now being played.
    Win { stage: Stage },
    /// Wrong hand. `stage` is the final score.
    Loss { stage: Stage },
    /// No answer before the deadline. `stage` is the final score.
    Timeout { stage: Stage },
}

impl Resolution {
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }
    pub fn stage(&self) -> Stage {
        match self {
            Self::Win { stage } | Self::Loss { stage } | Self::Timeout { stage } => *stage,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win { stage } => write!(f, "win -> stage {}", stage),
            Self::Loss { stage } => write!(f, "loss at stage {}", stage),
            Self::Timeout { stage } => write!(f, "timeout at stage {}", stage),
        }
    }
}

/// Pure state machine for a single stage run.
///
/// Holds no clock and no channels: the caller supplies `now` and the
/// random source, which keeps every transition deterministic under test.
/// At most one round is open at a time and each open round is resolved
/// exactly once, by whichever of `submit` or `expire` reaches it first.
#[derive(Debug)]
pub struct Run {
    id: ID<Self>,
    config: RunConfig,
    name: Option<Name>,
    stage: Stage,
    status: Status,
    round: Option<Round>,
    rounds: u64,
}

impl Unique for Run {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Run {
    pub fn new(config: RunConfig) -> Self {
        Self {
            id: ID::default(),
            config,
            name: None,
            stage: 1,
            status: Status::Idle,
            round: None,
            rounds: 0,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }
    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn status(&self) -> Status {
        self.status
    }
    /// The open round, if any.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }
    pub fn is_over(&self) -> bool {
        self.status == Status::Ended
    }

    /// Validates the name and spends one unit from the gate.
    /// Leaves the run untouched on any failure.
    pub fn start(&mut self, raw: &str, gate: &dyn Gate) -> Result<(), RunError> {
        if self.status != Status::Idle {
            return Err(RunError::NotIdle);
        }
        let name = Name::parse(raw, self.config.name_limit)?;
        if !gate.try_consume() {
            return Err(RunError::InsufficientStamina(gate.balance()));
        }
        log::debug!("[run {}] started by {}", self.id, name);
        self.name = Some(name);
        self.stage = 1;
        self.status = Status::InProgress;
        Ok(())
    }

    /// Opens a round at the current stage.
    /// Returns None if the run is not in progress or a round is already open.
    pub fn begin_round<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> Option<Round> {
        if self.status != Status::InProgress || self.round.is_some() {
            return None;
        }
        self.rounds += 1;
        let round = Round::new(
            self.rounds,
            self.stage,
            Hand::sample(rng),
            Offer::shuffle(rng),
            now,
            self.config.timer.duration(self.stage),
        );
        self.round = Some(round);
        Some(round)
    }

    /// Resolves round `number` with the player's hand.
    /// An answer at or past the deadline counts as a timeout.
    /// Returns None when round `number` is not the open round.
    pub fn submit(&mut self, number: u64, hand: Hand, now: Instant) -> Option<Resolution> {
        let round = self.round.filter(|round| round.number() == number)?;
        self.round = None;
        let resolution = if round.expired(now) {
            Resolution::Timeout { stage: self.stage }
        } else if hand.beats(round.cpu()) {
            self.stage += 1;
            Resolution::Win { stage: self.stage }
        } else {
            Resolution::Loss { stage: self.stage }
        };
        Some(self.settle(round, resolution))
    }

    /// Resolves round `number` by on-screen position. Out-of-range slots are ignored.
    pub fn pick(&mut self, number: u64, slot: Slot, now: Instant) -> Option<Resolution> {
        let hand = self.round.as_ref()?.offer().get(slot)?;
        self.submit(number, hand, now)
    }

    /// Applies tagged player input.
    pub fn apply(&mut self, input: Input, now: Instant) -> Option<Resolution> {
        match input.choice {
            Choice::Hand(hand) => self.submit(input.round, hand, now),
            Choice::Slot(slot) => self.pick(input.round, slot, now),
        }
    }

    /// Times out round `number` if it is still open. Stale numbers are ignored.
    pub fn expire(&mut self, number: u64) -> Option<Resolution> {
        match self.round {
            Some(round) if round.number() == number => {
                self.round = None;
                Some(self.settle(round, Resolution::Timeout { stage: self.stage }))
            }
            _ => None,
        }
    }

    fn settle(&mut self, round: Round, resolution: Resolution) -> Resolution {
        if !resolution.is_win() {
            self.status = Status::Ended;
        }
        log::trace!("[run {}] round {} {}", self.id, round.number(), resolution);
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rfx_stamina::*;
    use std::time::Duration;

    struct Empty;
    impl Gate for Empty {
        fn try_consume(&self) -> bool {
            false
        }
        fn balance(&self) -> Balance {
            Balance {
                current: 0,
                max: 5,
                until_next: Some(1000),
            }
        }
        fn refill(&self) {}
    }

    fn started() -> Run {
        let mut run = Run::new(RunConfig::default());
        run.start("Kim", &Unlimited).unwrap();
        run
    }

    #[test]
    fn new_run_is_idle() {
        let run = Run::new(RunConfig::default());
        assert_eq!(run.status(), Status::Idle);
        assert_eq!(run.stage(), 1);
        assert!(run.name().is_none());
    }
    #[test]
    fn start_rejects_bad_name_without_spending() {
        let pool = Pool::open_at(Volatile::default(), StaminaConfig::default(), 0);
        let mut run = Run::new(RunConfig::default());
        assert_eq!(
            run.start("   ", &pool),
            Err(RunError::Validation(NameError::Empty))
        );
        assert_eq!(run.status(), Status::Idle);
        assert_eq!(pool.balance_at(0).current, 5);
    }
    #[test]
    fn start_rejects_empty_gate() {
        let mut run = Run::new(RunConfig::default());
        match run.start("Kim", &Empty) {
            Err(RunError::InsufficientStamina(balance)) => assert!(balance.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(run.status(), Status::Idle);
    }
    #[test]
    fn start_only_once() {
        let mut run = started();
        assert_eq!(run.start("Kim", &Unlimited), Err(RunError::NotIdle));
        assert_eq!(run.name().map(Name::as_str), Some("Kim"));
    }
    #[test]
    fn idle_run_has_no_rounds() {
        let mut run = Run::new(RunConfig::default());
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(run.begin_round(&mut rng, Instant::now()).is_none());
    }
    #[test]
    fn one_round_at_a_time() {
        let mut run = started();
        let mut rng = SmallRng::seed_from_u64(1);
        let now = Instant::now();
        assert!(run.begin_round(&mut rng, now).is_some());
        assert!(run.begin_round(&mut rng, now).is_none());
    }
    #[test]
    fn win_advances_stage() {
        let mut run = started();
        let mut rng = SmallRng::seed_from_u64(2);
        let now = Instant::now();
        let round = run.begin_round(&mut rng, now).unwrap();
        assert_eq!(round.duration(), Duration::from_millis(5000));
        let resolution = run.submit(round.number(), round.answer(), now).unwrap();
        assert_eq!(resolution, Resolution::Win { stage: 2 });
        assert_eq!(run.status(), Status::InProgress);
        assert!(run.round().is_none());
        let round = run.begin_round(&mut rng, now).unwrap();
        assert_eq!(round.stage(), 2);
        assert_eq!(round.duration(), Duration::from_millis(4850));
    }
    #[test]
    fn wrong_hand_ends_run() {
        let mut run = started();
        let mut rng = SmallRng::seed_from_u64(3);
        let now = Instant::now();
        let round = run.begin_round(&mut rng, now).unwrap();
        let resolution = run.submit(round.number(), round.cpu(), now).unwrap();
        assert_eq!(resolution, Resolution::Loss { stage: 1 });
        assert!(run.is_over());
        assert!(run.begin_round(&mut rng, now).is_none());
    }
    #[test]
    fn late_answer_is_timeout() {
        let mut run = started();
        let mut rng = SmallRng::seed_from_u64(4);
        let now = Instant::now();
        let round = run.begin_round(&mut rng, now).unwrap();
        let late = now + round.duration();
        let resolution = run.submit(round.number(), round.answer(), late).unwrap();
        assert_eq!(resolution, Resolution::Timeout { stage: 1 });
        assert!(run.is_over());
    }
    #[test]
    fn resolved_exactly_once() {
        let mut run = started();
        let mut rng = SmallRng::seed_from_u64(5);
        let now = Instant::now();
        let round = run.begin_round(&mut rng, now).unwrap();
        assert!(run.submit(round.number(), round.answer(), now).is_some());
        assert!(run.expire(round.number()).is_none());
        assert!(run.submit(round.number(), round.answer(), now).is_none());
        assert_eq!(run.stage(), 2);
    }
    #[test]
    fn stale_expiry_ignored() {
        let mut run = started();
        let mut rng = SmallRng::seed_from_u64(6);
        let now = Instant::now();
        let first = run.begin_round(&mut rng, now).unwrap();
        run.submit(first.number(), first.answer(), now);
        let second = run.begin_round(&mut rng, now).unwrap();
        assert!(run.expire(first.number()).is_none());
        assert_eq!(run.round(), Some(&second));
        assert_eq!(
            run.expire(second.number()),
            Some(Resolution::Timeout { stage: 2 })
        );
    }
    #[test]
    fn pick_maps_slot_to_offer() {
        let mut run = started();
        let mut rng = SmallRng::seed_from_u64(7);
        let now = Instant::now();
        let round = run.begin_round(&mut rng, now).unwrap();
        assert!(run.pick(round.number(), 3, now).is_none());
        assert!(run.round().is_some());
        let slot = round.offer().slot(round.answer());
        assert!(run.pick(round.number(), slot, now).unwrap().is_win());
    }
    #[test]
    fn answer_for_previous_round_ignored() {
        let mut run = started();
        let mut rng = SmallRng::seed_from_u64(8);
        let now = Instant::now();
        let first = run.begin_round(&mut rng, now).unwrap();
        run.submit(first.number(), first.answer(), now);
        let second = run.begin_round(&mut rng, now).unwrap();
        assert!(run.submit(first.number(), second.answer(), now).is_none());
        assert!(run.pick(first.number(), 0, now).is_none());
        assert_eq!(run.round(), Some(&second));
        assert_eq!(run.stage(), 2);
        let input = Input::hand(second.number(), second.answer());
        assert_eq!(run.apply(input, now), Some(Resolution::Win { stage: 3 }));
    }
    #[test]
    fn ids_differ_per_run() {
        assert_ne!(
            Run::new(RunConfig::default()).id(),
            Run::new(RunConfig::default()).id()
        );
    }
}
