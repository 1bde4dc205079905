use super::card::Card;
use super::suit::Suit;

/// Hand represents an unordered set of Cards.
///
/// Stored as a single u64 using the LSB bitstring of 52 bits, one bit per
/// distinct card. Set union, membership, and per-suit projection are all
/// single bitwise ops, and the representation makes duplicate cards
/// unrepresentable: dealing the same physical card twice cannot happen.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    /// union of two disjoint card sets
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(u64::from(lhs) & u64::from(rhs) == 0);
        Self(lhs.0 | rhs.0)
    }

    /// all 52 cards not in this Hand
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0 & u64::from(card) != 0
    }
    /// cards of this Hand in the given Suit
    pub fn of(&self, suit: &Suit) -> Hand {
        let ranks = u64::from(*self) & u64::from(*suit);
        Self::from(ranks)
    }
    pub fn remove(&mut self, card: Card) {
        let card = u8::from(card);
        let mask = !(1 << card);
        self.0 &= mask;
    }
    /// highest card, by rank then suit. named to stay clear of the
    /// Iterator::max and Ord::max candidates this type also carries
    pub fn top(&self) -> Option<Card> {
        match self.size() {
            0 => None,
            _ => Some(Card::from(64 - 1 - self.0.leading_zeros() as u8)),
        }
    }

    pub(crate) const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(|c| u64::from(c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
///
/// whitespace-separated card wire strings. rejects duplicates.
impl TryFrom<&str> for Hand {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        let n = cards.len();
        let hand = Self::from(cards);
        if hand.size() == n {
            Ok(hand)
        } else {
            Err(crate::Error::ParseHand(s.to_string()))
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut cards = self.into_iter();
        if let Some(card) = cards.next() {
            write!(f, "{}", card)?;
        }
        for card in cards {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn bijective_u64() {
        let hand = Hand::try_from("J-C 10-S 2-C J-S").unwrap();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("J-C 10-S 2-C J-S").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2-C").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("10-S").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("J-C").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("J-S").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2-C 3-D 4-H 5-S 6-C 7-D 8-H 9-S 10-C J-D Q-H K-S A-C").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::Club)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of(&Suit::Diamond)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of(&Suit::Heart)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of(&Suit::Spade)), 0b_0100010001000);
    }

    #[test]
    fn complement_splits_the_deck() {
        let hand = Hand::try_from("A-S A-H").unwrap();
        let rest = hand.complement();
        assert_eq!(rest.size(), 50);
        assert_eq!(u64::from(hand) & u64::from(rest), 0);
    }

    #[test]
    fn duplicates_rejected() {
        assert_eq!(
            Hand::try_from("A-S A-S"),
            Err(crate::Error::ParseHand("A-S A-S".to_string()))
        );
    }

    #[test]
    fn top_is_highest_rank() {
        let hand = Hand::try_from("2-C K-H 9-D").unwrap();
        assert_eq!(hand.top().unwrap().rank(), Rank::King);
        assert_eq!(Hand::empty().top(), None);
        // the iterator's max is a different, consuming operation
        assert_eq!(Iterator::max(hand.into_iter()), hand.top());
    }
}
