use super::state::Snapshot;
use serde::Serialize;

/// External advice generator, e.g. a hosted language model. Failures
/// are recoverable: the coach falls back to rule-based text.
pub trait Oracle {
    fn advise(&self, snapshot: &Snapshot) -> anyhow::Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    #[serde(rename = "ai")]
    Ai,
    #[serde(rename = "rule_based")]
    RuleBased,
}

#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub success: bool,
    pub advice: String,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_error: Option<String>,
}

/// Strategy coach. Consults the oracle when one is wired in, and
/// always has a deterministic rule-based answer otherwise.
#[derive(Default)]
pub struct Coach {
    oracle: Option<Box<dyn Oracle>>,
}

impl Coach {
    pub fn new() -> Self {
        Self { oracle: None }
    }

    pub fn with_oracle(oracle: Box<dyn Oracle>) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    pub fn advise(&self, snapshot: &Snapshot) -> Advice {
        match &self.oracle {
            Some(oracle) => match oracle.advise(snapshot) {
                Ok(text) => Advice {
                    success: true,
                    advice: text,
                    source: Source::Ai,
                    api_error: None,
                },
                Err(e) => {
                    log::warn!("oracle failed, falling back to rules: {}", e);
                    Advice {
                        success: true,
                        advice: rule_based(snapshot),
                        source: Source::RuleBased,
                        api_error: Some(e.to_string()),
                    }
                }
            },
            None => Advice {
                success: true,
                advice: rule_based(snapshot),
                source: Source::RuleBased,
                api_error: None,
            },
        }
    }
}

/// Deterministic coaching text: summary, math, draws, position,
/// recommendation, takeaway.
fn rule_based(state: &Snapshot) -> String {
    let mut parts = Vec::new();
    let required = state.required_equity_pct;
    let equity = state.equity;

    parts.push("**SITUATION SUMMARY**".to_string());
    parts.push(format!(
        "You hold {} on the {} from {}.",
        state.hole.join(" "),
        state.street,
        state.position
    ));
    if !state.board.is_empty() {
        parts.push(format!("Board: {}", state.board.join(" ")));
    }
    parts.push(String::new());

    parts.push("**MATHEMATICAL ANALYSIS**".to_string());
    if state.to_call > 0. {
        parts.push(format!(
            "- Pot Odds: {} = {:.1}% required equity",
            state.pot_odds_display, required
        ));
        parts.push(format!("- Your Equity: {:.1}%", equity));
        let p = equity / 100.;
        let ev = p * (state.pot + state.to_call) - (1. - p) * state.to_call;
        if equity > required {
            parts.push(format!(
                "- You have +{:.1}% equity advantage - PROFITABLE CALL",
                equity - required
            ));
            parts.push(format!(
                "- Expected Value: +${:.2} per call in the long run",
                ev
            ));
        } else {
            parts.push(format!(
                "- You need {:.1}% more equity - UNPROFITABLE CALL",
                required - equity
            ));
            parts.push(format!(
                "- Expected Value: ${:.2} per call in the long run",
                ev
            ));
        }
    } else {
        parts.push("- Free to see the next card - always check when free!".to_string());
    }
    parts.push(String::new());

    if state.outs > 0 {
        parts.push("**DRAWING ANALYSIS**".to_string());
        parts.push(format!("- Outs: {}", state.outs));
        if state.flush_draw {
            parts.push("- Flush draw (9 outs)".to_string());
        }
        if state.open_ended_straight_draw {
            parts.push("- Open-ended straight draw (8 outs)".to_string());
        }
        if state.gutshot_straight_draw {
            parts.push("- Gutshot straight draw (4 outs)".to_string());
        }
        if state.overcards > 0 {
            parts.push(format!(
                "- Overcards: {} ({} outs)",
                state.overcards,
                state.overcards * 3
            ));
        }
        if state.street == "flop" {
            parts.push(format!(
                "- Rule of 4: {} outs x 4 = ~{}% to hit by river",
                state.outs,
                state.outs * 4
            ));
        } else if state.street == "turn" {
            parts.push(format!(
                "- Rule of 2: {} outs x 2 = ~{}% to hit on river",
                state.outs,
                state.outs * 2
            ));
        }
        parts.push(String::new());
    }

    parts.push("**POSITION ANALYSIS**".to_string());
    let seat = match state.position.as_str() {
        "BTN" => "You're on the Button - best position! You act last postflop, giving you maximum information.",
        "CO" => "You're in the Cutoff - great position. Consider stealing if folded to you.",
        "MP" | "MP1" => "Middle Position - play solid hands. Many players still to act.",
        "UTG" | "UTG1" => "Under the Gun - earliest position. Only play premium hands here.",
        "SB" => "Small Blind - worst position postflop. Be cautious without strong hands.",
        "BB" => "Big Blind - you have position in the betting order but are OOP postflop.",
        _ => "Consider your position relative to opponents.",
    };
    parts.push(format!("- {}", seat));
    if state.preflop_aggressor {
        parts.push("- You were the preflop aggressor - consider a continuation bet.".to_string());
    } else {
        parts.push("- You called preflop - be more cautious without a strong hand.".to_string());
    }
    parts.push(String::new());

    parts.push("**RECOMMENDATION**".to_string());
    if state.to_call == 0. {
        if equity > 50. {
            parts.push("**BET** - You likely have the best hand. Build the pot.".to_string());
        } else {
            parts.push("**CHECK** - Free card, see what develops.".to_string());
        }
    } else if equity > required + 15. {
        parts.push("**RAISE** - Strong equity advantage. Build the pot or take it now.".to_string());
    } else if equity > required + 5. {
        parts.push("**CALL** - Profitable call based on pot odds.".to_string());
    } else if equity > required - 5. {
        if state.stack > state.pot * 5. {
            parts.push(
                "**CALL (marginal)** - Close decision, but good implied odds if you hit."
                    .to_string(),
            );
        } else {
            parts.push(
                "**FOLD** - Marginally unprofitable. Save your chips for better spots.".to_string(),
            );
        }
    } else {
        parts.push("**FOLD** - The math doesn't support a call here.".to_string());
    }
    parts.push(String::new());

    parts.push("**KEY LEARNING**".to_string());
    if equity > required {
        parts.push(format!(
            "When your equity ({:.1}%) exceeds the pot odds requirement ({:.1}%), calling is mathematically profitable over time, even if you lose this specific hand.",
            equity, required
        ));
    } else {
        parts.push(format!(
            "When pot odds require {:.1}% equity but you only have {:.1}%, folding preserves your stack for better opportunities.",
            required, equity
        ));
    }

    parts.join("\n")
}
