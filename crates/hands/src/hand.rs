use rand::Rng;

/// One of the three throws.
///
/// Standard rules apply: R beats S, S beats P, P beats R.
/// Every hand beats exactly one hand and loses to exactly one hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    /// Rock — beats Scissors, loses to Paper.
    Rock,
    /// Paper — beats Rock, loses to Scissors.
    Paper,
    /// Scissors — beats Paper, loses to Rock.
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// The single hand this one defeats.
    pub const fn victim(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// The single hand that defeats this one.
    pub const fn counter(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    pub fn beats(self, other: Self) -> bool {
        self.victim() == other
    }
    /// Uniform draw from the given generator.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Rock => "✊",
            Self::Paper => "🖐️",
            Self::Scissors => "✌️",
        }
    }
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" | "✊" => Ok(Self::Rock),
            "p" | "paper" | "🖐️" | "🖐" => Ok(Self::Paper),
            "s" | "scissors" | "✌️" | "✌" => Ok(Self::Scissors),
            other => Err(format!("unknown hand: {}", other)),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    #[test]
    fn exactly_one_winner_and_loser() {
        for h in Hand::ALL {
            let winners = Hand::ALL.iter().filter(|x| x.beats(h)).count();
            let losers = Hand::ALL.iter().filter(|x| h.beats(**x)).count();
            assert_eq!(winners, 1);
            assert_eq!(losers, 1);
            assert!(!h.beats(h));
        }
    }
    #[test]
    fn counter_beats_hand() {
        for h in Hand::ALL {
            assert!(h.counter().beats(h));
            assert_eq!(h.counter().victim(), h);
            assert_eq!(h.victim().counter(), h);
        }
    }
    #[test]
    fn relation_is_a_cycle() {
        let h = Hand::Rock;
        assert_ne!(h.victim(), h);
        assert_ne!(h.victim().victim(), h);
        assert_eq!(h.victim().victim().victim(), h);
    }
    #[test]
    fn parse_names_and_emoji() {
        assert_eq!(Hand::try_from("rock"), Ok(Hand::Rock));
        assert_eq!(Hand::try_from(" Paper "), Ok(Hand::Paper));
        assert_eq!(Hand::try_from("s"), Ok(Hand::Scissors));
        assert_eq!(Hand::try_from("✊"), Ok(Hand::Rock));
        assert!(Hand::try_from("lizard").is_err());
    }
    #[test]
    fn labels_round_trip() {
        for h in Hand::ALL {
            assert_eq!(Hand::try_from(h.label()), Ok(h));
        }
    }
    #[test]
    fn sample_is_uniform() {
        const N: usize = 12_000;
        let ref mut rng = SmallRng::seed_from_u64(11);
        let mut counts = [0usize; 3];
        for _ in 0..N {
            counts[Hand::sample(rng) as usize] += 1;
        }
        for count in counts {
            let freq = count as f64 / N as f64;
            assert!((freq - 1.0 / 3.0).abs() < 0.02, "frequency {}", freq);
        }
    }
}
