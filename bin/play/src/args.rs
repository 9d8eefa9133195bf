use clap::Parser;
use rfx_core::*;
use rfx_gameroom::RunConfig;
use rfx_gameroom::TimerConfig;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Counter the CPU's hand before the clock runs out", long_about = None)]
pub struct Args {
    /// Display name, up to 10 characters. Prompted for when omitted.
    #[arg(long)]
    pub name: Option<String>,
    /// Where the stamina pool is persisted.
    #[arg(long, default_value = ".reflex/stamina.json")]
    pub stamina: PathBuf,
    /// Countdown at stage 1.
    #[arg(long, default_value_t = ROUND_BASE_MS)]
    pub base_ms: Millis,
    /// Countdown reduction per cleared stage.
    #[arg(long, default_value_t = ROUND_STEP_MS)]
    pub step_ms: Millis,
    /// Shortest countdown.
    #[arg(long, default_value_t = ROUND_FLOOR_MS)]
    pub floor_ms: Millis,
    /// Leaderboard rows shown after each run.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
    /// Let a bot with the given reaction time (ms) play instead.
    #[arg(long)]
    pub bot: Option<Millis>,
}

impl Args {
    pub fn config(&self) -> RunConfig {
        RunConfig {
            timer: TimerConfig {
                base: Duration::from_millis(self.base_ms),
                step: Duration::from_millis(self.step_ms),
                floor: Duration::from_millis(self.floor_ms),
                ..TimerConfig::default()
            },
            ..RunConfig::default()
        }
    }
}
