use super::action::Action;
use super::notation::Notation;
use super::position::Position;
use super::tables;
use std::collections::BTreeSet;

/// A position-and-action based read on an opponent's holdings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEstimate {
    pub range: BTreeSet<Notation>,
    pub description: String,
}

impl RangeEstimate {
    pub fn hand_count(&self) -> usize {
        self.range.len()
    }

    /// concrete combos out of the 1326 possible
    pub fn combo_count(&self) -> usize {
        self.range.iter().map(Notation::combos).sum()
    }

    /// share of all starting hands, in percent
    pub fn percentage(&self) -> f64 {
        self.combo_count() as f64 / 1326. * 100.
    }

    /// every concrete Hole in the range, for equity sampling
    pub fn holes(&self) -> Vec<crate::cards::hole::Hole> {
        self.range.iter().flat_map(Notation::holes).collect()
    }
}

/// Estimate what an opponent holds from seat and preflop action.
///
/// `facing` is the action they responded to, when known. A raise into
/// a prior raise reads as a 3-bet. 4-bet and all-in ranges are so
/// narrow that position stops mattering.
pub fn estimate(position: Position, action: Action, facing: Option<Action>) -> RangeEstimate {
    let seat = tables::seat(position);
    let (range, description) = match action {
        Action::Fold => (BTreeSet::new(), "Player folded".to_string()),
        Action::Raise | Action::Bet => {
            if matches!(facing, Some(Action::Raise) | Some(Action::ThreeBet)) {
                (
                    seat.three_bet.clone(),
                    format!("3-bet range from {}", position),
                )
            } else {
                (
                    seat.open_raise.clone(),
                    format!("Open raise range from {}", position),
                )
            }
        }
        Action::ThreeBet => (
            seat.three_bet.clone(),
            format!("3-bet range from {}", position),
        ),
        Action::FourBet => (
            tables::FOUR_BET.clone(),
            "4-bet range (very narrow)".to_string(),
        ),
        Action::AllIn => (
            tables::ALL_IN.clone(),
            "All-in range (typically premium)".to_string(),
        ),
        Action::Call => {
            let range = if facing == Some(Action::Raise) && !seat.call.is_empty() {
                seat.call.clone()
            } else {
                seat.open_raise.clone()
            };
            (range, format!("Calling range from {}", position))
        }
        Action::Limp => {
            let range = if seat.limp.is_empty() {
                tables::DEFAULT_LIMP.clone()
            } else {
                seat.limp.clone()
            };
            (
                range,
                format!("Limp range from {} (passive/weak)", position),
            )
        }
        Action::Check => (
            seat.open_raise.clone(),
            format!("Estimated range from {}", position),
        ),
    };
    RangeEstimate { range, description }
}
