use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// The cards still unseen from a player's point of view.
///
/// A fresh Deck is all 52 cards; `hiding` removes known cards by set
/// complement. Randomness is threaded through an explicit Rng so that
/// simulations are reproducible when seeded. Drawing never mutates any
/// canonical reference deck, only this copy.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

/// deterministic low-to-high consumption, no randomness
impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }

    /// the 52-card deck minus every card already seen
    pub fn hiding(known: Hand) -> Self {
        Self(known.complement())
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a uniformly random card from the deck
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rng.random_range(0..n as u8);
        let mut ones = 0u8;
        let mut deck = u64::from(self.0);
        let mut card = u64::from(self.0).trailing_zeros() as u8;
        while ones < i {
            deck = deck & (deck - 1);
            card = deck.trailing_zeros() as u8;
            ones = ones + 1;
        }
        let card = Card::from(card);
        self.remove(card);
        card
    }

    /// remove n uniformly random cards from the deck
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_has_52() {
        assert_eq!(Deck::new().size(), 52);
        assert_eq!(Deck::new().count(), 52);
    }

    #[test]
    fn hiding_excludes_known() {
        let known = Hand::try_from("A-S K-H 7-D").unwrap();
        let deck = Deck::hiding(known);
        assert_eq!(deck.size(), 49);
        for card in known {
            assert!(!Hand::from(deck).contains(card));
        }
    }

    #[test]
    fn draws_are_distinct() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let mut deck = Deck::new();
        let dealt = deck.deal(52, rng);
        assert_eq!(dealt.size(), 52);
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn seeded_draws_reproduce() {
        let a = Deck::new().deal(5, &mut SmallRng::seed_from_u64(7));
        let b = Deck::new().deal(5, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
