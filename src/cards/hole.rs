use super::card::Card;
use super::hand::Hand;

/// Exactly two hole cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> (Card, Card) {
        let mut iter = self.0.into_iter();
        let lo = iter.next().expect("two cards");
        let hi = iter.next().expect("two cards");
        (hi, lo)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<&str> for Hole {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        if hand.size() == 2 {
            Ok(Self(hand))
        } else {
            Err(crate::Error::ParseHand(s.to_string()))
        }
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        use crate::cards::deck::Deck;
        let ref mut rng = rand::rng();
        let mut deck = Deck::new();
        let a = deck.draw(rng);
        let b = deck.draw(rng);
        Self::from((a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn cards_come_out_high_first() {
        let hole = Hole::try_from("2-C A-S").unwrap();
        let (hi, lo) = hole.cards();
        assert_eq!(hi.rank(), Rank::Ace);
        assert_eq!(lo.rank(), Rank::Two);
    }

    #[test]
    fn requires_exactly_two() {
        assert!(Hole::try_from("A-S").is_err());
        assert!(Hole::try_from("A-S K-S Q-S").is_err());
    }
}
