use crate::args::Args;
use dialoguer::console::Key;
use rfx_gameroom::*;
use rfx_leaderboard::*;
use rfx_players::*;
use rfx_stamina::*;
use std::sync::Arc;
use std::time::Duration;

/// One terminal player across many runs.
pub struct Session {
    args: Args,
    name: Name,
    pool: Pool<Disk>,
    board: Arc<dyn Leaderboard>,
    keyboard: Keyboard,
    terminal: Terminal,
}

impl Session {
    pub async fn open(args: Args) -> anyhow::Result<Self> {
        let config = args.config();
        let name = match args.name.as_deref() {
            Some(raw) => Name::parse(raw, config.name_limit)?,
            None => Self::prompt(config.name_limit)?,
        };
        let pool = Pool::open(Disk::new(&args.stamina), StaminaConfig::default());
        let board = Self::board().await?;
        let best = match board.rank(name.as_str()).await {
            Ok(ranking) => ranking.entry.best(),
            Err(_) => 0,
        };
        log::info!("[session] {} opened (best {})", name, best);
        Ok(Self {
            args,
            name,
            pool,
            board,
            keyboard: Keyboard::spawn(),
            terminal: Terminal::new(best),
        })
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            println!("\n{}  stamina {}", self.name, self.pool.balance());
            let mut room = Room::new(self.args.config(), self.board.clone());
            match room.start(self.name.as_str(), &self.pool) {
                Ok(()) => {}
                Err(RunError::InsufficientStamina(balance)) => {
                    println!("Out of stamina: {}", balance);
                    println!("[w] watch an ad to refill   [enter] wait   [q] quit");
                    match self.choose(&['w', 'q', '\n']).await {
                        Some('w') => self.watch().await,
                        Some('\n') => continue,
                        _ => break,
                    }
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            println!("Pick the hand that beats the CPU: ←↓→, 1 2 3, or a s d");
            let summary = self.drive(room).await;
            log::info!("[session] run {} ended at stage {}", summary.id, summary.stage);
            self.standings().await;
            println!("\n[enter] play again   [q] quit");
            match self.choose(&['\n', 'q']).await {
                Some('\n') => continue,
                _ => break,
            }
        }
        Ok(())
    }

    /// Plays one run, forwarding keys into the room until it finishes.
    async fn drive(&mut self, room: Room) -> Summary {
        let remote = room.remote();
        let cursor = room.cursor();
        let presenter: Box<dyn Presenter + '_> = match self.args.bot {
            Some(ms) => Box::new(Reflex::new(room.remote()).latency(Duration::from_millis(ms))),
            None => Box::new(&mut self.terminal),
        };
        let play = room.play(presenter);
        tokio::pin!(play);
        self.keyboard.flush();
        loop {
            tokio::select! {
                summary = &mut play => return summary,
                Some(key) = self.keyboard.next() => {
                    if let Some(choice) = Keyboard::choice(&key) {
                        let _ = remote.send(Input::new(*cursor.borrow(), choice));
                    }
                }
            }
        }
    }

    async fn standings(&self) {
        println!("\n── Top {} ──", self.args.top);
        match self.board.top(self.args.top).await {
            Ok(entries) if entries.is_empty() => println!("  no scores yet"),
            Ok(entries) => entries.iter().enumerate().for_each(|(i, entry)| {
                let marker = if entry.name() == self.name.as_str() { "◀" } else { "" };
                println!("{:>4}. {:<10} {:>4} {}", i + 1, entry.name(), entry.best(), marker);
            }),
            Err(e) => println!("  leaderboard failed to load: {}", e),
        }
        match self.board.rank(self.name.as_str()).await {
            Ok(ranking) => println!("You: {}", ranking),
            Err(LeaderboardError::NotFound(_)) => println!("You: unranked"),
            Err(e) => println!("You: rank failed to load ({})", e),
        }
    }

    /// Rewarded refill. The ad itself is a pause.
    async fn watch(&self) {
        println!("Playing ad...");
        tokio::time::sleep(Duration::from_secs(3)).await;
        self.pool.refill();
        println!("Stamina refilled: {}", self.pool.balance());
    }

    /// Waits for one of `keys`. Enter maps to '\n'. None when input closes.
    async fn choose(&mut self, keys: &[char]) -> Option<char> {
        self.keyboard.flush();
        while let Some(key) = self.keyboard.next().await {
            let c = match key {
                Key::Enter => '\n',
                Key::Escape => 'q',
                Key::Char(c) => c.to_ascii_lowercase(),
                _ => continue,
            };
            if keys.contains(&c) {
                return Some(c);
            }
        }
        None
    }

    fn prompt(limit: usize) -> anyhow::Result<Name> {
        let raw = dialoguer::Input::<String>::new()
            .with_prompt(format!("Name (max {})", limit))
            .validate_with(|s: &String| -> Result<(), String> {
                Name::parse(s, limit).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(Name::parse(&raw, limit)?)
    }

    async fn board() -> anyhow::Result<Arc<dyn Leaderboard>> {
        match std::env::var("DB_URL") {
            Ok(url) => {
                let store = Postgres::new(rfx_pg::db(&url).await?);
                store.migrate().await?;
                Ok(Arc::new(store))
            }
            Err(_) => Ok(Arc::new(Memory::new())),
        }
    }
}
