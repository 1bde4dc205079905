use crate::Chips;
use crate::Equity;
use serde::Serialize;

/// Price offered by the pot.
///
/// A call of zero chips means a free check, reported as a zero ratio
/// and zero required equity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PotOdds {
    pub ratio: f64,
    pub required_equity_pct: Equity,
}

impl std::fmt::Display for PotOdds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.ratio == 0. {
            write!(f, "Free check")
        } else {
            write!(f, "{:.1}:1", self.ratio)
        }
    }
}

pub fn pot_odds(pot: Chips, call: Chips) -> PotOdds {
    if call <= 0. {
        PotOdds {
            ratio: 0.,
            required_equity_pct: 0.,
        }
    } else {
        PotOdds {
            ratio: pot / call,
            required_equity_pct: call / (pot + call) * 100.,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Play {
    Check,
    Raise,
    Call,
    CallMarginal,
    Fold,
    FoldClose,
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Play::Check => write!(f, "CHECK"),
            Play::Raise => write!(f, "RAISE"),
            Play::Call => write!(f, "CALL"),
            Play::CallMarginal => write!(f, "CALL (marginal)"),
            Play::Fold => write!(f, "FOLD"),
            Play::FoldClose => write!(f, "FOLD (close)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionReport {
    pub pot_odds: PotOdds,
    pub equity: Equity,
    pub required_equity: Equity,
    pub profitable: bool,
    pub expected_value: Chips,
    pub play: Play,
    pub reasoning: String,
    pub implied_odds_note: Option<String>,
}

/// Compare equity against the price of the call.
///
/// Margin over the requirement picks the action: more than 20 points
/// ahead raises, more than 10 calls, any positive edge calls marginally.
/// Behind by more than 15 points folds outright, anything closer is a
/// close fold. EV is per-call chips won on average.
pub fn decide(pot: Chips, call: Chips, equity: Equity, stack: Chips) -> DecisionReport {
    let odds = pot_odds(pot, call);
    let required = odds.required_equity_pct;
    if call <= 0. {
        return DecisionReport {
            pot_odds: odds,
            equity,
            required_equity: required,
            profitable: true,
            expected_value: 0.,
            play: Play::Check,
            reasoning: "No bet to call. Checking is free.".to_string(),
            implied_odds_note: None,
        };
    }
    let margin = equity - required;
    let profitable = margin > 0.;
    let p = equity / 100.;
    let expected_value = p * (pot + call) - (1. - p) * call;
    let (play, reasoning) = if margin > 20. {
        (
            Play::Raise,
            format!(
                "Equity {:.1}% far exceeds the {:.1}% required. Raise for value.",
                equity, required
            ),
        )
    } else if margin > 10. {
        (
            Play::Call,
            format!(
                "Equity {:.1}% comfortably beats the {:.1}% required.",
                equity, required
            ),
        )
    } else if margin > 0. {
        (
            Play::CallMarginal,
            format!(
                "Equity {:.1}% narrowly beats the {:.1}% required.",
                equity, required
            ),
        )
    } else if margin < -15. {
        (
            Play::Fold,
            format!(
                "Equity {:.1}% is well short of the {:.1}% required.",
                equity, required
            ),
        )
    } else {
        (
            Play::FoldClose,
            format!(
                "Equity {:.1}% falls just short of the {:.1}% required.",
                equity, required
            ),
        )
    };
    let implied_odds_note = if !profitable && stack / pot > 5. {
        Some(
            "Deep stacks may offer implied odds beyond the direct price.".to_string(),
        )
    } else {
        None
    };
    DecisionReport {
        pot_odds: odds,
        equity,
        required_equity: required,
        profitable,
        expected_value,
        play,
        reasoning,
        implied_odds_note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_to_one_requires_a_third() {
        let odds = pot_odds(100., 50.);
        assert_eq!(odds.ratio, 2.0);
        assert!((odds.required_equity_pct - 33.333).abs() < 0.01);
        assert_eq!(format!("{}", odds), "2.0:1");
    }

    #[test]
    fn free_check_sentinel() {
        let odds = pot_odds(100., 0.);
        assert_eq!(odds.ratio, 0.);
        assert_eq!(odds.required_equity_pct, 0.);
        assert_eq!(format!("{}", odds), "Free check");
    }

    #[test]
    fn big_edge_raises() {
        let report = decide(100., 50., 60., 1000.);
        assert_eq!(report.play, Play::Raise);
        assert!(report.profitable);
        assert_eq!(report.expected_value, 70.);
    }

    #[test]
    fn comfortable_edge_calls() {
        let report = decide(100., 50., 45., 1000.);
        assert_eq!(report.play, Play::Call);
    }

    #[test]
    fn thin_edge_calls_marginally() {
        let report = decide(100., 50., 35., 1000.);
        assert_eq!(report.play, Play::CallMarginal);
    }

    #[test]
    fn no_bet_checks() {
        let report = decide(100., 0., 12., 1000.);
        assert_eq!(report.play, Play::Check);
        assert!(report.profitable);
        assert_eq!(report.expected_value, 0.);
    }

    #[test]
    fn hopeless_equity_folds() {
        let report = decide(100., 50., 10., 1000.);
        assert_eq!(report.play, Play::Fold);
        assert!(!report.profitable);
        assert!(report.expected_value < 0.);
    }

    #[test]
    fn near_miss_is_a_close_fold() {
        let report = decide(100., 50., 30., 200.);
        assert_eq!(report.play, Play::FoldClose);
    }

    #[test]
    fn deep_stacks_note_implied_odds() {
        let report = decide(100., 50., 30., 1000.);
        assert!(report.implied_odds_note.is_some());
        let shallow = decide(100., 50., 30., 200.);
        assert!(shallow.implied_odds_note.is_none());
    }
}
