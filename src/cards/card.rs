#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self {
            rank: Rank::from((n.trailing_zeros() / 4) as u8),
            suit: Suit::from((n.trailing_zeros() % 4) as u8),
        }
    }
}

/// str isomorphism
///
/// wire form: "<RANK>-<SUIT>" with rank in 2..10 J Q K A (ten as "10")
/// and suit in H D C S. round-trips for all 52 legal values.
impl TryFrom<&str> for Card {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (rank, suit) = s
            .split_once('-')
            .ok_or_else(|| crate::Error::ParseCard(s.to_string()))?;
        Ok(Self {
            rank: Rank::try_from(rank).map_err(|_| crate::Error::ParseCard(s.to_string()))?,
            suit: Suit::try_from(suit).map_err(|_| crate::Error::ParseCard(s.to_string()))?,
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.rank.wire(), self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}


use super::rank::Rank;
use super::suit::Suit;
