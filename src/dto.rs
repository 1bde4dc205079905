use crate::analysis::draws::DrawsReport;
use crate::analysis::odds::DecisionReport;
use crate::analysis::outs::OutsReport;
use crate::ranges::Class;
use crate::ranges::Narrowed;
use crate::ranges::RangeEstimate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiOuts {
    pub total: usize,
    pub to_pair: Vec<String>,
    pub to_two_pair: Vec<String>,
    pub to_trips: Vec<String>,
    pub to_straight: Vec<String>,
    pub to_flush: Vec<String>,
    pub to_full_house: Vec<String>,
    pub to_quads: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiDraws {
    pub flush_draw: bool,
    pub flush_draw_suit: Option<String>,
    pub flush_draw_outs: usize,
    pub open_ended_straight_draw: bool,
    pub gutshot_straight_draw: bool,
    pub straight_outs: usize,
    pub overcards: Vec<String>,
    pub overcard_outs: usize,
    pub total_drawing_outs: usize,
}

#[derive(Debug, Serialize)]
pub struct ApiRange {
    pub range: Vec<String>,
    pub description: String,
    pub hand_count: usize,
    pub combo_count: usize,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct ApiNarrowed {
    pub kept: Vec<String>,
    pub removed: Vec<String>,
    pub monotone: bool,
    pub two_tone: bool,
    pub paired: bool,
    pub connected: bool,
    pub high_card: Option<String>,
    pub bet_sizing: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiClass {
    pub notation: String,
    pub is_pair: bool,
    pub is_suited: bool,
    pub tier: String,
    pub strength: String,
    pub multiway_preference: String,
}

#[derive(Debug, Serialize)]
pub struct ApiDecision {
    pub play: String,
    pub pot_odds: String,
    pub required_equity_pct: f64,
    pub equity: f64,
    pub profitable: bool,
    pub expected_value: f64,
    pub reasoning: String,
    pub implied_odds_note: Option<String>,
}

fn wires(cards: &[crate::cards::card::Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}

impl From<OutsReport> for ApiOuts {
    fn from(outs: OutsReport) -> Self {
        Self {
            total: outs.total,
            to_pair: wires(&outs.to_pair),
            to_two_pair: wires(&outs.to_two_pair),
            to_trips: wires(&outs.to_trips),
            to_straight: wires(&outs.to_straight),
            to_flush: wires(&outs.to_flush),
            to_full_house: wires(&outs.to_full_house),
            to_quads: wires(&outs.to_quads),
        }
    }
}

impl From<DrawsReport> for ApiDraws {
    fn from(draws: DrawsReport) -> Self {
        Self {
            flush_draw: draws.flush_draw,
            flush_draw_suit: draws.flush_draw_suit.map(|s| s.to_string()),
            flush_draw_outs: draws.flush_draw_outs,
            open_ended_straight_draw: draws.open_ended_straight_draw,
            gutshot_straight_draw: draws.gutshot_straight_draw,
            straight_outs: draws.straight_outs,
            overcards: draws.overcards.iter().map(|c| c.to_string()).collect(),
            overcard_outs: draws.overcard_outs,
            total_drawing_outs: draws.total_drawing_outs,
        }
    }
}

impl From<RangeEstimate> for ApiRange {
    fn from(estimate: RangeEstimate) -> Self {
        Self {
            hand_count: estimate.hand_count(),
            combo_count: estimate.combo_count(),
            percentage: (estimate.percentage() * 10.).round() / 10.,
            range: estimate.range.iter().map(|n| n.to_string()).collect(),
            description: estimate.description,
        }
    }
}

impl From<Narrowed> for ApiNarrowed {
    fn from(narrowed: Narrowed) -> Self {
        Self {
            kept: narrowed.kept.iter().map(|n| n.to_string()).collect(),
            removed: narrowed.removed.iter().map(|n| n.to_string()).collect(),
            monotone: narrowed.texture.monotone,
            two_tone: narrowed.texture.two_tone,
            paired: narrowed.texture.paired,
            connected: narrowed.texture.connected,
            high_card: narrowed.texture.high_card.map(|r| r.wire().to_string()),
            bet_sizing: narrowed.sizing.map(|s| s.label().to_string()),
        }
    }
}

impl From<Class> for ApiClass {
    fn from(class: Class) -> Self {
        Self {
            notation: class.notation.to_string(),
            is_pair: class.notation.is_pair(),
            is_suited: class.notation.is_suited(),
            tier: class.tier.to_string(),
            strength: class.strength.to_string(),
            multiway_preference: class.preference.describe(class.notation).to_string(),
        }
    }
}

impl From<DecisionReport> for ApiDecision {
    fn from(decision: DecisionReport) -> Self {
        Self {
            play: decision.play.to_string(),
            pot_odds: decision.pot_odds.to_string(),
            required_equity_pct: decision.required_equity,
            equity: decision.equity,
            profitable: decision.profitable,
            expected_value: decision.expected_value,
            reasoning: decision.reasoning,
            implied_odds_note: decision.implied_odds_note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::odds;
    use crate::ranges::Action;
    use crate::ranges::Position;
    use crate::ranges::estimator;

    #[test]
    fn decision_payload() {
        let api = ApiDecision::from(odds::decide(100., 50., 60., 1000.));
        assert_eq!(api.play, "RAISE");
        assert_eq!(api.pot_odds, "2.0:1");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["profitable"], true);
    }

    #[test]
    fn range_payload_rounds_percentage() {
        let api = ApiRange::from(estimator::estimate(Position::UTG, Action::Raise, None));
        assert_eq!(api.hand_count, 14);
        assert!(api.range.contains(&"AA".to_string()));
        let rounded = (api.percentage * 10.).round() / 10.;
        assert_eq!(api.percentage, rounded);
    }

    #[test]
    fn class_payload() {
        use crate::cards::hole::Hole;
        use crate::ranges::classify;
        let class = classify::classify_preflop(Hole::try_from("A-S K-S").unwrap());
        let api = ApiClass::from(class);
        assert_eq!(api.notation, "AKs");
        assert!(api.is_suited);
        assert_eq!(api.tier, "Premium");
    }
}
