use crate::Chips;
use crate::Equity;
use serde::Serialize;

/// Everything the coach needs to talk about one decision point.
///
/// Flat and serializable so it can cross any boundary: cards as wire
/// strings, math already computed by the analysis modules.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub hole: Vec<String>,
    pub board: Vec<String>,
    pub street: String,
    pub position: String,
    pub pot: Chips,
    pub to_call: Chips,
    pub stack: Chips,
    pub opponents: usize,
    pub pot_odds_display: String,
    pub required_equity_pct: Equity,
    pub equity: Equity,
    pub outs: usize,
    pub flush_draw: bool,
    pub open_ended_straight_draw: bool,
    pub gutshot_straight_draw: bool,
    pub overcards: usize,
    pub opponent_ranges: Vec<String>,
    pub preflop_aggressor: bool,
    pub previous_actions: Vec<String>,
}
