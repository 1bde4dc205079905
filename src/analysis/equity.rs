use crate::Equity;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// Monte Carlo equity estimate.
///
/// Inherently approximate: two runs differ unless seeded with the same
/// Rng. Ties split pot credit, so equity = win% + tie%/2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquitySummary {
    pub equity: Equity,
    pub win_pct: Equity,
    pub tie_pct: Equity,
    pub trials: usize,
}

/// Closed-form equity from the rule of 4 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickEquity {
    pub equity: usize,
    pub outs: usize,
    pub multiplier: usize,
    pub cards_to_come: usize,
}

/// Hand preference as opponent count grows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiwayProfile {
    pub equity_by_opponents: Vec<(usize, Equity)>,
    pub prefers_headsup: bool,
    pub prefers_multiway: bool,
}

/// Estimate hero equity by simulation.
///
/// Each trial independently completes the board from the unseen cards,
/// deals every opponent a hand, and compares evaluations. An opponent
/// with a supplied combo list is sampled uniformly from the candidates
/// still disjoint from the cards already dealt this trial; an exhausted
/// candidate list falls back to a uniform random deal. Cards never
/// repeat within a trial. Hero wins a trial iff no opponent is strictly
/// better and ties iff the best opponent is exactly equal.
///
/// Accuracy scales with `trials`; callers bound latency by asking for
/// fewer trials.
pub fn monte_carlo(
    hole: Hole,
    board: Hand,
    opponents: usize,
    trials: usize,
    ranges: &[Vec<Hole>],
    rng: &mut impl Rng,
) -> EquitySummary {
    assert!(trials > 0);
    let known = Hand::add(Hand::from(hole), board);
    let to_come = 5 - board.size();
    let mut wins = 0usize;
    let mut ties = 0usize;
    for _ in 0..trials {
        let mut deck = Deck::hiding(known);
        let complete = Hand::add(board, deck.deal(to_come, rng));
        let hero = Strength::from(Hand::add(Hand::from(hole), complete));
        let mut best_is_tie = false;
        let mut beaten = false;
        for i in 0..opponents {
            let villain = deal_villain(ranges.get(i), &mut deck, rng);
            let villain = Strength::from(Hand::add(Hand::from(villain), complete));
            if villain > hero {
                beaten = true;
                break;
            }
            if villain == hero {
                best_is_tie = true;
            }
        }
        if beaten {
            continue;
        }
        if best_is_tie {
            ties += 1;
        } else {
            wins += 1;
        }
    }
    let win_pct = wins as Equity / trials as Equity * 100.;
    let tie_pct = ties as Equity / trials as Equity * 100.;
    EquitySummary {
        equity: win_pct + tie_pct / 2.,
        win_pct,
        tie_pct,
        trials,
    }
}

fn deal_villain(range: Option<&Vec<Hole>>, deck: &mut Deck, rng: &mut impl Rng) -> Hole {
    if let Some(combos) = range {
        let live = combos
            .iter()
            .copied()
            .filter(|h| u64::from(Hand::from(*h)) & !u64::from(Hand::from(*deck)) == 0)
            .collect::<Vec<Hole>>();
        if let Some(hole) = live.choose(rng) {
            let (a, b) = hole.cards();
            deck.remove(a);
            deck.remove(b);
            return *hole;
        }
    }
    let a = deck.draw(rng);
    let b = deck.draw(rng);
    Hole::from((a, b))
}

/// outs x4 on the flop, x2 on the turn, capped at 100. zero elsewhere.
pub fn rule_of_4_and_2(outs: usize, street: Street) -> QuickEquity {
    let (multiplier, cards_to_come) = match street {
        Street::Flop => (4, 2),
        Street::Turn => (2, 1),
        _ => (0, 0),
    };
    QuickEquity {
        equity: std::cmp::min(outs * multiplier, 100),
        outs,
        multiplier,
        cards_to_come,
    }
}

/// Simulate equity against 1, 2, 3, 5, and 8 opponents to see whether
/// the hand plays better heads-up or multiway.
pub fn multiway_profile(
    hole: Hole,
    board: Hand,
    trials: usize,
    rng: &mut impl Rng,
) -> MultiwayProfile {
    let equity_by_opponents = [1usize, 2, 3, 5, 8]
        .iter()
        .map(|&n| (n, monte_carlo(hole, board, n, trials, &[], rng).equity))
        .collect::<Vec<_>>();
    let headsup = equity_by_opponents[0].1;
    let multiway = equity_by_opponents[3].1;
    MultiwayProfile {
        prefers_headsup: headsup > multiway * 1.3,
        prefers_multiway: multiway > headsup * 0.8,
        equity_by_opponents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }
    fn board(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn made_royal_flush_is_exactly_100() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let summary = monte_carlo(
            hole("A-S K-S"),
            board("Q-S J-S 10-S 2-H 7-D"),
            1,
            1000,
            &[],
            rng,
        );
        assert_eq!(summary.equity, 100.0);
        assert_eq!(summary.win_pct, 100.0);
        assert_eq!(summary.tie_pct, 0.0);
    }

    #[test]
    fn aces_beat_a_random_hand_most_of_the_time() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let summary = monte_carlo(hole("A-S A-H"), Hand::empty(), 1, 2000, &[], rng);
        assert!(summary.equity > 75.0, "AA equity: {}", summary.equity);
        assert!(summary.equity < 95.0, "AA equity: {}", summary.equity);
    }

    #[test]
    fn equity_shrinks_with_more_opponents() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let one = monte_carlo(hole("A-S A-H"), Hand::empty(), 1, 1500, &[], rng).equity;
        let five = monte_carlo(hole("A-S A-H"), Hand::empty(), 5, 1500, &[], rng).equity;
        assert!(one > five);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let run = |seed| {
            monte_carlo(
                hole("J-H 10-H"),
                board("9-H 8-C 2-H"),
                2,
                500,
                &[],
                &mut SmallRng::seed_from_u64(seed),
            )
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn range_sampling_respects_the_supplied_combos() {
        // villain always holds aces; hero's kings are crushed
        let ref mut rng = SmallRng::seed_from_u64(4);
        let villains = vec![vec![hole("A-S A-H")]];
        let summary = monte_carlo(hole("K-S K-H"), Hand::empty(), 1, 500, &villains, rng);
        assert!(summary.equity < 30.0, "KK vs AA: {}", summary.equity);
    }

    #[test]
    fn rule_of_4_on_the_flop() {
        let quick = rule_of_4_and_2(9, Street::Flop);
        assert_eq!(quick.equity, 36);
        assert_eq!(quick.cards_to_come, 2);
    }

    #[test]
    fn rule_of_2_on_the_turn() {
        let quick = rule_of_4_and_2(9, Street::Turn);
        assert_eq!(quick.equity, 18);
        assert_eq!(quick.cards_to_come, 1);
    }

    #[test]
    fn rule_caps_at_100() {
        assert_eq!(rule_of_4_and_2(30, Street::Flop).equity, 100);
    }

    #[test]
    fn rule_is_zero_off_street() {
        assert_eq!(rule_of_4_and_2(9, Street::Rive).equity, 0);
        assert_eq!(rule_of_4_and_2(9, Street::Pref).equity, 0);
    }

    #[test]
    fn small_pair_prefers_multiway() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let profile = multiway_profile(hole("5-S 5-H"), Hand::empty(), 400, rng);
        assert_eq!(profile.equity_by_opponents.len(), 5);
        let (n, first) = profile.equity_by_opponents[0];
        assert_eq!(n, 1);
        assert!(first > 40.0);
    }
}
