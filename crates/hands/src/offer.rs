use super::*;
use rand::Rng;
use rand::seq::SliceRandom;
use rfx_core::Arbitrary;
use rfx_core::Slot;

/// All three hands, each exactly once, in on-screen order.
///
/// The order is a uniform permutation so the winning slot
/// cannot be learned across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offer([Hand; 3]);

impl Offer {
    pub fn shuffle<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut hands = Hand::ALL;
        hands.shuffle(rng);
        Self(hands)
    }
    pub fn hands(&self) -> [Hand; 3] {
        self.0
    }
    pub fn get(&self, slot: Slot) -> Option<Hand> {
        self.0.get(slot).copied()
    }
    pub fn slot(&self, hand: Hand) -> Slot {
        self.0
            .iter()
            .position(|h| *h == hand)
            .expect("offer holds every hand")
    }
    pub fn iter(&self) -> impl Iterator<Item = Hand> + '_ {
        self.0.iter().copied()
    }
}

impl Arbitrary for Offer {
    fn random() -> Self {
        Self::shuffle(&mut rand::rng())
    }
}

impl From<Offer> for [Hand; 3] {
    fn from(offer: Offer) -> Self {
        offer.0
    }
}

impl std::fmt::Display for Offer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{} {} {}]", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    #[test]
    fn offer_is_a_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let offer = Offer::shuffle(rng);
            let mut hands = offer.hands();
            hands.sort();
            assert_eq!(hands, Hand::ALL);
        }
    }
    #[test]
    fn slots_are_uniform() {
        const N: usize = 12_000;
        let ref mut rng = SmallRng::seed_from_u64(42);
        let mut counts = [[0usize; 3]; 3];
        for _ in 0..N {
            let offer = Offer::shuffle(rng);
            for (slot, hand) in offer.iter().enumerate() {
                counts[slot][hand as usize] += 1;
            }
        }
        for slot in counts {
            for count in slot {
                let freq = count as f64 / N as f64;
                assert!((freq - 1.0 / 3.0).abs() < 0.02, "frequency {}", freq);
            }
        }
    }
    #[test]
    fn slot_lookup() {
        let offer = Offer::random();
        for (i, hand) in offer.iter().enumerate() {
            assert_eq!(offer.slot(hand), i);
            assert_eq!(offer.get(i), Some(hand));
        }
        assert_eq!(offer.get(3), None);
    }
}
