use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// An evaluated hand: category plus kicker tiebreaks.
///
/// Derived Ord compares Ranking first, then Kickers, which is the total
/// order over hand strengths. Evaluating fewer than 5 cards degrades to
/// the lowest high-card sentinel instead of failing, since early streets
/// legitimately reach this path; callers should gate on street before
/// trusting the result.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
    pub fn kicks(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        if hand.size() < 5 {
            Self::from((Ranking::HighCard(Rank::Two), Kickers::from(0u32)))
        } else {
            Self::from(Evaluator::from(hand))
        }
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn order_invariant_under_input_permutation() {
        let a = strength("A-S K-H Q-D J-C 9-S 2-H 2-D");
        let b = strength("2-D 9-S J-C 2-H Q-D K-H A-S");
        assert_eq!(a, b);
    }

    #[test]
    fn kickers_break_ties() {
        let high = strength("A-S A-H K-D Q-C J-S");
        let low = strength("A-D A-C K-H Q-S 9-H");
        assert!(high > low);
    }

    #[test]
    fn quads_by_rank_then_kicker() {
        let aces = strength("A-S A-H A-D A-C 2-S");
        let kings = strength("K-S K-H K-D K-C A-S");
        assert!(aces > kings);
        let ace_kicker = strength("K-S K-H K-D K-C A-S");
        let two_kicker = strength("K-S K-H K-D K-C 2-S");
        assert!(ace_kicker > two_kicker);
    }

    #[test]
    fn royal_beats_lower_straight_flush() {
        let royal = strength("10-S J-S Q-S K-S A-S");
        let lower = strength("9-S 10-S J-S Q-S K-S");
        assert!(royal > lower);
    }

    #[test]
    fn wheel_ranks_below_six_high_straight() {
        let wheel = strength("A-S 2-H 3-D 4-C 5-S");
        let six = strength("2-S 3-H 4-D 5-C 6-S");
        assert!(wheel < six);
    }

    #[test]
    fn true_ties_compare_equal() {
        let a = strength("A-S K-S Q-H J-D 9-C");
        let b = strength("A-H K-D Q-C J-S 9-H");
        assert_eq!(a, b);
    }

    #[test]
    fn short_input_degrades_to_sentinel() {
        let sentinel = strength("A-S K-H");
        assert_eq!(sentinel.value(), Ranking::HighCard(Rank::Two));
        assert!(sentinel < strength("2-C 3-D 5-H 7-S 9-C"));
    }
}
