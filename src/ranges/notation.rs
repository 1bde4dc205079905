use crate::cards::hole::Hole;
use crate::cards::rank::Rank;

/// Suit relationship between two hole cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

/// Positional shorthand for a starting hand class, like "AA", "AKs",
/// or "T9o". Collapses the 1326 concrete two-card combos into 169
/// classes. High rank always comes first.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Notation {
    hi: Rank,
    lo: Rank,
    shape: Shape,
}

impl Notation {
    pub fn hi(&self) -> Rank {
        self.hi
    }
    pub fn lo(&self) -> Rank {
        self.lo
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn is_pair(&self) -> bool {
        self.shape == Shape::Pair
    }
    pub fn is_suited(&self) -> bool {
        self.shape == Shape::Suited
    }

    /// rank distance between the two cards
    pub fn gap(&self) -> u8 {
        self.hi as u8 - self.lo as u8
    }

    /// concrete two-card combinations this class covers
    pub fn combos(&self) -> usize {
        match self.shape {
            Shape::Pair => 6,
            Shape::Suited => 4,
            Shape::Offsuit => 12,
        }
    }

    /// every concrete Hole belonging to this class
    pub fn holes(&self) -> Vec<Hole> {
        use crate::cards::card::Card;
        use crate::cards::suit::Suit;
        let mut holes = Vec::with_capacity(self.combos());
        for a in Suit::all() {
            for b in Suit::all() {
                let keep = match self.shape {
                    Shape::Pair => (a as u8) < (b as u8),
                    Shape::Suited => a == b,
                    Shape::Offsuit => a != b,
                };
                if keep {
                    let hi = Card::from((self.hi, a));
                    let lo = Card::from((self.lo, b));
                    holes.push(Hole::from((hi, lo)));
                }
            }
        }
        holes
    }
}

impl From<Hole> for Notation {
    fn from(hole: Hole) -> Self {
        let (hi, lo) = hole.cards();
        let shape = if hi.rank() == lo.rank() {
            Shape::Pair
        } else if hi.suit() == lo.suit() {
            Shape::Suited
        } else {
            Shape::Offsuit
        };
        Self {
            hi: hi.rank(),
            lo: lo.rank(),
            shape,
        }
    }
}

impl TryFrom<&str> for Notation {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let err = || crate::Error::ParseNotation(s.to_string());
        let mut chars = s.chars();
        let a = chars.next().ok_or_else(err)?;
        let b = chars.next().ok_or_else(err)?;
        let tag = chars.next();
        if chars.next().is_some() {
            return Err(err());
        }
        let a = Rank::try_from(a.to_string().as_str()).map_err(|_| err())?;
        let b = Rank::try_from(b.to_string().as_str()).map_err(|_| err())?;
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        let shape = match tag {
            None if hi == lo => Shape::Pair,
            Some('s') if hi != lo => Shape::Suited,
            Some('o') if hi != lo => Shape::Offsuit,
            _ => return Err(err()),
        };
        Ok(Self { hi, lo, shape })
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.shape {
            Shape::Pair => write!(f, "{}{}", self.hi, self.lo),
            Shape::Suited => write!(f, "{}{}s", self.hi, self.lo),
            Shape::Offsuit => write!(f, "{}{}o", self.hi, self.lo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_suited_offsuit() {
        assert_eq!(Notation::try_from("AA").unwrap().combos(), 6);
        assert_eq!(Notation::try_from("AKs").unwrap().combos(), 4);
        assert_eq!(Notation::try_from("T9o").unwrap().combos(), 12);
    }

    #[test]
    fn rejects_malformed() {
        assert!(Notation::try_from("AK").is_err());
        assert!(Notation::try_from("AAs").is_err());
        assert!(Notation::try_from("AKx").is_err());
        assert!(Notation::try_from("A").is_err());
        assert!(Notation::try_from("AKso").is_err());
    }

    #[test]
    fn normalizes_high_card_first() {
        assert_eq!(format!("{}", Notation::try_from("9Ts").unwrap()), "T9s");
        assert_eq!(format!("{}", Notation::try_from("KAo").unwrap()), "AKo");
    }

    #[test]
    fn display_round_trips() {
        for s in ["AA", "22", "AKs", "T9o", "72o", "54s"] {
            let n = Notation::try_from(s).unwrap();
            assert_eq!(format!("{}", n), s);
        }
    }

    #[test]
    fn from_hole() {
        let hole = Hole::try_from("A-S K-S").unwrap();
        assert_eq!(format!("{}", Notation::from(hole)), "AKs");
        let hole = Hole::try_from("9-H 10-C").unwrap();
        assert_eq!(format!("{}", Notation::from(hole)), "T9o");
        let hole = Hole::try_from("7-H 7-C").unwrap();
        assert_eq!(format!("{}", Notation::from(hole)), "77");
    }

    #[test]
    fn holes_cover_every_combo() {
        assert_eq!(Notation::try_from("AA").unwrap().holes().len(), 6);
        assert_eq!(Notation::try_from("AKs").unwrap().holes().len(), 4);
        assert_eq!(Notation::try_from("T9o").unwrap().holes().len(), 12);
    }

    #[test]
    fn gap() {
        assert_eq!(Notation::try_from("AKs").unwrap().gap(), 1);
        assert_eq!(Notation::try_from("T9o").unwrap().gap(), 1);
        assert_eq!(Notation::try_from("A2s").unwrap().gap(), 12);
        assert_eq!(Notation::try_from("88").unwrap().gap(), 0);
    }
}
