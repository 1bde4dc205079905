use super::action::Action;
use super::notation::Notation;
use crate::Chips;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use std::collections::BTreeSet;

/// Structural features of the board that shape which hands continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub monotone: bool,
    pub two_tone: bool,
    pub paired: bool,
    pub connected: bool,
    pub high_card: Option<Rank>,
}

impl From<Hand> for Texture {
    fn from(board: Hand) -> Self {
        let suits = Suit::all()
            .into_iter()
            .filter(|s| board.of(s).size() > 0)
            .count();
        let values = u16::from(board).count_ones() as usize;
        let high_card = board.top().map(|c| c.rank());
        let connected = board.size() >= 3
            && match high_card {
                Some(hi) => hi as u8 - Rank::lo(u64::from(board)) as u8 <= 4,
                None => false,
            };
        Self {
            monotone: board.size() > 0 && suits == 1,
            two_tone: suits == 2,
            paired: values < board.size(),
            connected,
            high_card,
        }
    }
}

/// What a bet size, relative to the pot, says about the bettor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    Small,
    SmallMedium,
    Medium,
    Large,
    Overbet,
    MassiveOverbet,
}

impl Sizing {
    pub fn classify(bet: Chips, pot: Chips) -> Option<Self> {
        if bet <= 0. || pot <= 0. {
            return None;
        }
        let ratio = bet / pot;
        Some(if ratio < 0.33 {
            Self::Small
        } else if ratio < 0.5 {
            Self::SmallMedium
        } else if ratio < 0.75 {
            Self::Medium
        } else if ratio <= 1.0 {
            Self::Large
        } else if ratio <= 1.5 {
            Self::Overbet
        } else {
            Self::MassiveOverbet
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small (< 1/3 pot)",
            Self::SmallMedium => "Small-Medium (1/3 - 1/2 pot)",
            Self::Medium => "Medium (1/2 - 3/4 pot)",
            Self::Large => "Large (3/4 - pot)",
            Self::Overbet => "Overbet (pot - 1.5x pot)",
            Self::MassiveOverbet => "Massive overbet (> 1.5x pot)",
        }
    }

    pub fn typical_range(&self) -> &'static str {
        match self {
            Self::Small => "Wide range - blocking bet, thin value, or weak draw",
            Self::SmallMedium => "Moderate strength or drawing hands",
            Self::Medium => "Standard value bet or semi-bluff",
            Self::Large => "Strong value or big draw",
            Self::Overbet => "Very strong or bluff",
            Self::MassiveOverbet => "Nuts or complete bluff",
        }
    }

    pub fn strength_indicator(&self) -> &'static str {
        match self {
            Self::Small => "Usually weak to medium",
            Self::SmallMedium => "Medium",
            Self::Medium => "Medium to strong",
            Self::Large => "Strong",
            Self::Overbet => "Very strong or air",
            Self::MassiveOverbet => "Nuts or nothing",
        }
    }
}

/// A preflop range filtered down by one postflop action.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrowed {
    pub kept: BTreeSet<Notation>,
    pub removed: BTreeSet<Notation>,
    pub texture: Texture,
    pub sizing: Option<Sizing>,
}

/// Narrow a preflop range from a postflop action. A coarse model:
/// a bet, raise, 3-bet, or shove keeps strong pairs, ace-highs,
/// broadway suited hands, and suited combos on monotone boards.
/// Passive actions keep the range intact, as does a 4-bet (the model
/// carries no read for it). A fold discounts the strongest holdings.
/// Narrowing to nothing returns the range unchanged.
pub fn narrow_range_postflop(
    preflop: &BTreeSet<Notation>,
    board: Hand,
    action: Action,
    bet: Chips,
    pot: Chips,
) -> Narrowed {
    let texture = Texture::from(board);
    let sizing = Sizing::classify(bet, pot);
    let narrows = matches!(
        action,
        Action::Bet | Action::Raise | Action::ThreeBet | Action::AllIn
    );
    let mut kept = BTreeSet::new();
    let mut removed = BTreeSet::new();
    for hand in preflop.iter().copied() {
        let keep = if narrows {
            (hand.is_pair() && hand.hi() >= Rank::Nine)
                || hand.hi() == Rank::Ace
                || (hand.is_suited() && hand.hi() >= Rank::Ten && hand.lo() >= Rank::Ten)
                || (texture.monotone && hand.is_suited())
        } else if action == Action::Fold {
            let premium_pair = hand.is_pair() && hand.hi() >= Rank::Jack;
            let big_slick = hand.hi() == Rank::Ace && hand.lo() == Rank::King;
            !premium_pair && !big_slick
        } else {
            true
        };
        if keep {
            kept.insert(hand);
        } else {
            removed.insert(hand);
        }
    }
    if kept.is_empty() {
        kept = preflop.clone();
        removed.clear();
    }
    Narrowed {
        kept,
        removed,
        texture,
        sizing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(hands: &[&str]) -> BTreeSet<Notation> {
        hands
            .iter()
            .map(|s| Notation::try_from(*s).unwrap())
            .collect()
    }
    fn board(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn monotone_board() {
        let texture = Texture::from(board("A-H 9-H 4-H"));
        assert!(texture.monotone);
        assert!(!texture.two_tone);
        assert_eq!(texture.high_card, Some(Rank::Ace));
    }

    #[test]
    fn paired_connected_board() {
        let texture = Texture::from(board("8-H 8-C 6-D"));
        assert!(texture.paired);
        assert!(texture.connected);
    }

    #[test]
    fn empty_board_has_no_high_card() {
        let texture = Texture::from(Hand::empty());
        assert_eq!(texture.high_card, None);
        assert!(!texture.monotone);
        assert!(!texture.connected);
    }

    #[test]
    fn sizing_buckets() {
        assert_eq!(Sizing::classify(25., 100.), Some(Sizing::Small));
        assert_eq!(Sizing::classify(40., 100.), Some(Sizing::SmallMedium));
        assert_eq!(Sizing::classify(60., 100.), Some(Sizing::Medium));
        assert_eq!(Sizing::classify(100., 100.), Some(Sizing::Large));
        assert_eq!(Sizing::classify(150., 100.), Some(Sizing::Overbet));
        assert_eq!(Sizing::classify(200., 100.), Some(Sizing::MassiveOverbet));
        assert_eq!(Sizing::classify(0., 100.), None);
    }

    #[test]
    fn aggression_drops_weak_offsuit_hands() {
        let preflop = range(&["AA", "72o", "AKs", "98o"]);
        let narrowed = narrow_range_postflop(
            &preflop,
            board("K-H 9-C 4-D"),
            Action::Bet,
            50.,
            100.,
        );
        assert!(narrowed.kept.contains(&Notation::try_from("AA").unwrap()));
        assert!(narrowed.kept.contains(&Notation::try_from("AKs").unwrap()));
        assert!(narrowed.removed.contains(&Notation::try_from("72o").unwrap()));
        assert!(narrowed.removed.contains(&Notation::try_from("98o").unwrap()));
    }

    #[test]
    fn monotone_keeps_suited_combos() {
        let preflop = range(&["76s", "76o"]);
        let narrowed = narrow_range_postflop(
            &preflop,
            board("A-H 9-H 4-H"),
            Action::Raise,
            50.,
            100.,
        );
        assert!(narrowed.kept.contains(&Notation::try_from("76s").unwrap()));
        assert!(narrowed.removed.contains(&Notation::try_from("76o").unwrap()));
    }

    #[test]
    fn calling_keeps_everything() {
        let preflop = range(&["AA", "72o", "54s"]);
        let narrowed =
            narrow_range_postflop(&preflop, board("K-H 9-C 4-D"), Action::Call, 0., 100.);
        assert_eq!(narrowed.kept, preflop);
        assert!(narrowed.removed.is_empty());
    }

    #[test]
    fn folding_discounts_the_top() {
        let preflop = range(&["AA", "AKo", "87s"]);
        let narrowed =
            narrow_range_postflop(&preflop, board("K-H 9-C 4-D"), Action::Fold, 0., 100.);
        assert!(narrowed.kept.contains(&Notation::try_from("87s").unwrap()));
        assert!(narrowed.removed.contains(&Notation::try_from("AA").unwrap()));
        assert!(narrowed.removed.contains(&Notation::try_from("AKo").unwrap()));
    }

    #[test]
    fn four_bet_leaves_the_range_unchanged() {
        let preflop = range(&["AA", "72o"]);
        let narrowed =
            narrow_range_postflop(&preflop, board("K-H 9-C 4-D"), Action::FourBet, 200., 100.);
        assert_eq!(narrowed.kept, preflop);
        assert!(narrowed.removed.is_empty());
    }

    #[test]
    fn narrowing_to_nothing_reverts() {
        let preflop = range(&["72o", "83o"]);
        let narrowed =
            narrow_range_postflop(&preflop, board("K-H 9-C 4-D"), Action::Bet, 50., 100.);
        assert_eq!(narrowed.kept, preflop);
        assert!(narrowed.removed.is_empty());
    }
}
