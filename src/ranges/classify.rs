use super::notation::Notation;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;

/// Playability tier of a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Premium,
    Strong,
    Speculative,
    Playable,
    Weak,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// How a hand wants the pot to play out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Multiway,
    HeadsUp,
    Neutral,
}

impl Preference {
    pub fn describe(&self, notation: Notation) -> &'static str {
        match self {
            Self::Multiway if notation.is_pair() => "Prefers multiway (set mining)",
            Self::Multiway => "Prefers multiway (drawing potential)",
            Self::HeadsUp => "Prefers heads-up (high card value)",
            Self::Neutral => "Neutral",
        }
    }
}

/// Preflop classification of two hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub notation: Notation,
    pub tier: Tier,
    pub strength: &'static str,
    pub preference: Preference,
}

/// Bucket a starting hand by tier and pot-shape preference.
///
/// Big pairs and ace-king are premium; middling pairs and suited
/// broadways are strong; small pairs and suited connectors are
/// speculative drawing hands; a bare ace is playable; the rest is weak.
pub fn classify_preflop(hole: Hole) -> Class {
    let notation = Notation::from(hole);
    let hi = notation.hi();
    let lo = notation.lo();
    let pair = notation.is_pair();
    let suited = notation.is_suited();
    let gap = notation.gap();
    let (tier, strength) = if pair && hi >= Rank::Jack {
        (Tier::Premium, "Very Strong")
    } else if hi == Rank::Ace && lo == Rank::King {
        (Tier::Premium, "Very Strong")
    } else if pair && hi >= Rank::Seven {
        (Tier::Strong, "Strong")
    } else if suited && hi >= Rank::Ten && lo >= Rank::Ten {
        (Tier::Strong, "Strong")
    } else if pair {
        (Tier::Speculative, "Medium")
    } else if suited && gap <= 2 && hi >= Rank::Eight {
        (Tier::Speculative, "Medium (drawing hand)")
    } else if hi == Rank::Ace {
        (Tier::Playable, "Medium")
    } else {
        (Tier::Weak, "Weak")
    };
    let preference = if pair && hi <= Rank::Ten {
        Preference::Multiway
    } else if suited && gap <= 3 {
        Preference::Multiway
    } else if hi >= Rank::King && lo >= Rank::Jack {
        Preference::HeadsUp
    } else {
        Preference::Neutral
    };
    Class {
        notation,
        tier,
        strength,
        preference,
    }
}
