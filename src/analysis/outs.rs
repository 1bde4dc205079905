use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::ranking::Ranking;
use crate::cards::strength::Strength;

/// Every unseen card that strictly improves the current hand, partitioned
/// by the category of the hand it improves to.
///
/// A card lands in a category bucket only when the current hand sits
/// strictly below that category; a card that merely upgrades kickers
/// within the same category still counts toward `total` but carries no
/// label. The buckets together cover exactly the labeled outs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutsReport {
    pub total: usize,
    pub to_pair: Vec<Card>,
    pub to_two_pair: Vec<Card>,
    pub to_trips: Vec<Card>,
    pub to_straight: Vec<Card>,
    pub to_flush: Vec<Card>,
    pub to_full_house: Vec<Card>,
    pub to_quads: Vec<Card>,
}

/// Enumerate outs by brute force over the unseen card set.
///
/// Uses only information the player actually has: hole cards and board.
/// All 52 - known cards are candidates, since opponents' holdings and
/// mucked cards are unknown. Each candidate is added to the known cards
/// and re-evaluated; it is an out iff the new Strength strictly exceeds
/// the baseline. At most 47 candidates, so the cost is a small constant.
pub fn count_outs(hole: Hole, board: Hand) -> OutsReport {
    let known = Hand::add(Hand::from(hole), board);
    let baseline = Strength::from(known);
    let current = baseline.value();
    let mut outs = OutsReport::default();
    for card in Deck::hiding(known) {
        let next = Strength::from(Hand::add(known, Hand::from(card)));
        if next <= baseline {
            continue;
        }
        outs.total += 1;
        match next.value() {
            Ranking::Straight(_) | Ranking::StraightFlush(_) => {
                if !matches!(current, Ranking::Straight(_)) {
                    outs.to_straight.push(card);
                }
            }
            Ranking::Flush(_) => {
                if !matches!(current, Ranking::Flush(_)) {
                    outs.to_flush.push(card);
                }
            }
            Ranking::FourOAK(_) => {
                outs.to_quads.push(card);
            }
            Ranking::FullHouse(..) => {
                if current < Ranking::FullHouse(Rank::Two, Rank::Two) {
                    outs.to_full_house.push(card);
                }
            }
            Ranking::ThreeOAK(_) => {
                outs.to_trips.push(card);
            }
            Ranking::TwoPair(..) => {
                if current < Ranking::TwoPair(Rank::Two, Rank::Two) {
                    outs.to_two_pair.push(card);
                }
            }
            Ranking::OnePair(_) => {
                outs.to_pair.push(card);
            }
            Ranking::HighCard(_) => {}
        }
    }
    outs
}

use crate::cards::deck::Deck;
use crate::cards::rank::Rank;
