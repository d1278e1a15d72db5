//! How many different five-card hands holding two red pairs can be dealt
//! from a standard deck?
//!
//! [`red_pairs`] evaluates the closed form; [`count_hands`] walks every hand
//! of the deck so the closed form can be checked against the real count.

use std::fmt;

use arrayvec::ArrayVec;

pub const NUM_RANKS: u8 = 13;

pub const NUM_SUITS: u8 = 4;

pub const HAND_SIZE: usize = 5;

pub const CLUBS: u8 = 0;
pub const HEARTS: u8 = 1;
pub const DIAMONDS: u8 = 2;
pub const SPADES: u8 = 3;

/// Red suits: hearts and diamonds.
pub const NUM_RED_SUITS: u8 = 2;

/// Pairs a qualifying hand must hold.
pub const PAIRS_REQUIRED: u8 = 2;

type RankCounts = [u8; NUM_RANKS as usize];

pub type Hand = ArrayVec<Card, HAND_SIZE>;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Card {
    pub suit: u8,
    pub rank: u8,
}

impl Card {
    pub fn is_red(self) -> bool {
        self.suit == HEARTS || self.suit == DIAMONDS
    }
}

/// The 52 cards, grouped by suit.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity((NUM_SUITS * NUM_RANKS) as usize);
    for suit in [CLUBS, HEARTS, DIAMONDS, SPADES] {
        for rank in 0..NUM_RANKS {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

fn rank_counts(cards: &[Card]) -> RankCounts {
    let mut ret = RankCounts::default();
    for c in cards {
        ret[c.rank as usize] += 1;
    }
    ret
}

/// Exactly two pairs, no three of a kind, and every card of both paired
/// ranks is red.
pub fn is_two_red_pairs(cards: &[Card]) -> bool {
    let counts = rank_counts(cards);
    if counts.iter().any(|&c| c >= 3) {
        return false;
    }
    let paired = (0..NUM_RANKS)
        .filter(|&r| counts[r as usize] == 2)
        .collect::<ArrayVec<u8, { NUM_RANKS as usize }>>();
    paired.len() == PAIRS_REQUIRED as usize
        && cards
            .iter()
            .filter(|c| paired.contains(&c.rank))
            .all(|c| c.is_red())
}

/// `value * (value - 1) * ...` over `terms` factors.
pub fn falling_product(value: u32, terms: u32) -> u32 {
    (0..terms).map(|i| value - i).product()
}

/// Terms of the closed-form count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RedPairs {
    /// Cards (pairs) to choose, `k`.
    pub to_choose: u32,
    /// Ranks left for the fifth card once the pairs are fixed.
    pub available: u32,
    /// Ways to pick the fifth card.
    pub fifth_card_ways: u32,
    /// Ways to pick the two paired ranks.
    pub rank_choices: f64,
    pub total: f64,
}

/// `[V * (V - 1) / k] * [(V - k) * 2S]` with `V = 13`, `k = 2`, `S = 2`.
pub fn red_pairs() -> RedPairs {
    let values = NUM_RANKS as u32;
    let k = PAIRS_REQUIRED as u32;
    let available = values - k;

    let rank_choices = falling_product(values, k) as f64 / k as f64;
    let fifth_card_ways = available * 2 * NUM_RED_SUITS as u32;

    RedPairs {
        to_choose: k,
        available,
        fifth_card_ways,
        rank_choices,
        total: rank_choices * fifth_card_ways as f64,
    }
}

impl fmt::Display for RedPairs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "k={}", self.to_choose)?;
        writeln!(f, "available={}", self.available)?;
        writeln!(f, "fifth-card ways={}", self.fifth_card_ways)?;
        write!(f, "result=[{:.2}]", self.total)
    }
}

fn count_from(
    deck: &[Card],
    start: usize,
    hand: &mut Hand,
    accept: &impl Fn(&[Card]) -> bool,
) -> u64 {
    if hand.is_full() {
        return accept(hand.as_slice()) as u64;
    }
    let needed = HAND_SIZE - hand.len();
    let mut count = 0;
    for i in start..deck.len() {
        if deck.len() - i < needed {
            break;
        }
        hand.push(deck[i]);
        count += count_from(deck, i + 1, hand, accept);
        hand.pop();
    }
    count
}

/// Number of `HAND_SIZE`-card hands from `deck` for which `accept` holds.
pub fn count_hands(deck: &[Card], accept: impl Fn(&[Card]) -> bool) -> u64 {
    count_from(deck, 0, &mut Hand::new(), &accept)
}

#[cfg(test)]
mod tests {
    use super::*;
    const R2: u8 = 0;
    const R5: u8 = 3;
    const R9: u8 = 7;
    const RK: u8 = 11;
    const RA: u8 = 12;

    #[test]
    fn test_rank_counts() {
        assert_eq!(RankCounts::default(), rank_counts(&[]));

        let mut expected = RankCounts::default();
        expected[1] = 2;
        expected[3] = 1;
        assert_eq!(
            expected,
            rank_counts(&[
                Card { suit: 0, rank: 1 },
                Card { suit: 0, rank: 1 },
                Card { suit: 2, rank: 3 }
            ])
        )
    }

    #[test]
    fn test_standard_deck() {
        let deck = standard_deck();
        assert_eq!(52, deck.len());
        assert_eq!(26, deck.iter().filter(|c| c.is_red()).count());
        for (i, a) in deck.iter().enumerate() {
            assert!(!deck[i + 1..].contains(a));
        }
    }

    #[test]
    fn test_falling_product() {
        assert_eq!(1, falling_product(13, 0));
        assert_eq!(13, falling_product(13, 1));
        assert_eq!(156, falling_product(13, 2));
        assert_eq!(1716, falling_product(13, 3));
    }

    #[test]
    fn test_red_pairs() {
        let r = red_pairs();
        assert_eq!(2, r.to_choose);
        assert_eq!(11, r.available);
        assert_eq!(44, r.fifth_card_ways);
        assert_eq!(78.0, r.rank_choices);
        assert!((r.total - 3432.0).abs() < 1e-9);

        let shown = r.to_string();
        assert!(shown.contains("k=2"));
        assert!(shown.contains("available=11"));
        assert!(shown.contains("fifth-card ways=44"));
        assert!(shown.contains("[3432.00]"));
    }

    #[test]
    fn test_is_two_red_pairs() {
        assert!(!is_two_red_pairs(&[]));
        assert!(is_two_red_pairs(&[
            Card { suit: HEARTS, rank: R2 },
            Card { suit: DIAMONDS, rank: R2 },
            Card { suit: HEARTS, rank: RK },
            Card { suit: DIAMONDS, rank: RK },
            Card { suit: SPADES, rank: R9 },
        ]));
        // black pair
        assert!(!is_two_red_pairs(&[
            Card { suit: HEARTS, rank: R2 },
            Card { suit: DIAMONDS, rank: R2 },
            Card { suit: CLUBS, rank: RK },
            Card { suit: SPADES, rank: RK },
            Card { suit: HEARTS, rank: R9 },
        ]));
        // mixed pair
        assert!(!is_two_red_pairs(&[
            Card { suit: HEARTS, rank: R2 },
            Card { suit: CLUBS, rank: R2 },
            Card { suit: HEARTS, rank: RK },
            Card { suit: DIAMONDS, rank: RK },
            Card { suit: HEARTS, rank: R9 },
        ]));
        // three of a kind on a paired rank
        assert!(!is_two_red_pairs(&[
            Card { suit: HEARTS, rank: R2 },
            Card { suit: DIAMONDS, rank: R2 },
            Card { suit: HEARTS, rank: RK },
            Card { suit: DIAMONDS, rank: RK },
            Card { suit: SPADES, rank: RK },
        ]));
        // one pair only
        assert!(!is_two_red_pairs(&[
            Card { suit: HEARTS, rank: R2 },
            Card { suit: DIAMONDS, rank: R2 },
            Card { suit: HEARTS, rank: R5 },
            Card { suit: DIAMONDS, rank: RA },
            Card { suit: SPADES, rank: RK },
        ]));
    }

    #[test]
    fn test_count_hands() {
        let deck = standard_deck();
        assert_eq!(1, count_hands(&deck[..HAND_SIZE], |_| true));
        assert_eq!(6, count_hands(&deck[..HAND_SIZE + 1], |_| true));
        assert_eq!(0, count_hands(&deck[..HAND_SIZE - 1], |_| true));
        assert_eq!(2_598_960, count_hands(&deck, |_| true));
    }

    #[test]
    fn test_closed_form_matches_enumeration() {
        let counted = count_hands(&standard_deck(), is_two_red_pairs);
        assert_eq!(red_pairs().total, counted as f64);
    }
}
