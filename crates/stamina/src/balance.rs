use rfx_core::Millis;

/// Point-in-time view of a stamina pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Balance {
    pub current: u32,
    pub max: u32,
    /// Time until the next unit regenerates. None when the pool is full.
    pub until_next: Option<Millis>,
}

impl Balance {
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

/// Pools larger than this render as counts only.
const HEARTS: u32 = 10;

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.max <= HEARTS {
            let hearts = (0..self.max)
                .map(|i| if i < self.current { "❤️" } else { "🤍" })
                .collect::<String>();
            write!(f, "{} ", hearts)?;
        }
        write!(f, "({}/{})", self.current, self.max)?;
        if let Some(ms) = self.until_next {
            let secs = ms.div_ceil(1000);
            write!(f, " next in {:02}:{:02}", secs / 60, secs % 60)?;
        }
        Ok(())
    }
}
