use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::suit::Suit;

/// Structural draw patterns over the known cards.
///
/// This is the cheap front-end signal: direct rank/suit pattern rules,
/// standard out constants, never a full hand evaluation. The exhaustive
/// count lives in `outs::count_outs`. The combined total subtracts a
/// fixed overlap correction of 2 when a flush draw coexists with any
/// straight draw; the constant is a deliberate approximation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawsReport {
    pub flush_draw: bool,
    pub flush_draw_suit: Option<Suit>,
    pub flush_draw_outs: usize,
    pub open_ended_straight_draw: bool,
    pub gutshot_straight_draw: bool,
    pub straight_outs: usize,
    pub overcards: Vec<Card>,
    pub overcard_outs: usize,
    pub total_drawing_outs: usize,
}

pub fn detect_draws(hole: Hole, board: Hand) -> DrawsReport {
    let known = Hand::add(Hand::from(hole), board);
    let mut draws = DrawsReport::default();

    // flush draw: exactly 4 of one suit among known cards
    for suit in Suit::all() {
        if known.of(&suit).size() == 4 {
            draws.flush_draw = true;
            draws.flush_draw_suit = Some(suit);
            draws.flush_draw_outs = 9; // 13 - 4 of that suit remain
        }
    }

    // straight draws over the distinct rank values
    let values = distinct_values(known);
    for window in values.windows(4) {
        if window[3] - window[0] == 3 {
            let low_open = window[0] > 0;
            let high_open = window[3] < 12;
            if low_open && high_open {
                draws.open_ended_straight_draw = true;
                draws.straight_outs = 8;
                break;
            }
        }
    }
    if !draws.open_ended_straight_draw {
        for window in values.windows(4) {
            if window[3] - window[0] == 4 {
                draws.gutshot_straight_draw = true;
                draws.straight_outs = 4;
                break;
            }
        }
    }

    // hole cards above the highest board card, ~3 outs apiece
    if let Some(top) = board.top() {
        let (hi, lo) = hole.cards();
        for card in [hi, lo] {
            if card.rank() > top.rank() {
                draws.overcards.push(card);
            }
        }
        draws.overcard_outs = draws.overcards.len() * 3;
    }

    let mut total = draws.flush_draw_outs + draws.straight_outs + draws.overcard_outs;
    if draws.flush_draw && (draws.open_ended_straight_draw || draws.gutshot_straight_draw) {
        total -= 2;
    }
    draws.total_drawing_outs = total;
    draws
}

fn distinct_values(hand: Hand) -> Vec<i8> {
    let ranks = u16::from(hand);
    (0..13i8).filter(|v| ranks & (1 << v) != 0).collect()
}
