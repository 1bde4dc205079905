//! Decision Advisor Binary
//!
//! One-shot table analysis: outs, draws, equity, pot odds, and a
//! recommended action for a described situation.

use clap::Parser;
use colored::Colorize;
use railbird::advice::Coach;
use railbird::advice::Snapshot;
use railbird::analysis::draws;
use railbird::analysis::equity;
use railbird::analysis::odds;
use railbird::analysis::outs;
use railbird::cards::hand::Hand;
use railbird::cards::hole::Hole;
use railbird::cards::street::Street;
use railbird::dto;
use railbird::ranges::Action;
use railbird::ranges::Position;
use railbird::ranges::classify;
use railbird::ranges::estimator;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
#[command(about = "Texas hold'em decision analysis")]
struct Args {
    /// your two hole cards, like "A-S K-S"
    #[arg(long)]
    hole: String,
    /// community cards, like "Q-S J-S 2-H"
    #[arg(long, default_value = "")]
    board: String,
    #[arg(long, default_value_t = 0.0)]
    pot: f64,
    #[arg(long, default_value_t = 0.0)]
    call: f64,
    #[arg(long, default_value_t = 100.0)]
    stack: f64,
    #[arg(long, default_value = "BTN")]
    position: String,
    #[arg(long, default_value_t = 1)]
    opponents: usize,
    #[arg(long, default_value_t = 10_000)]
    trials: usize,
    /// fix the simulation seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// estimate the villain's range from their preflop action
    #[arg(long)]
    villain_action: Option<String>,
    #[arg(long)]
    villain_position: Option<String>,
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    railbird::log();
    let args = Args::parse();
    let hole = Hole::try_from(args.hole.as_str())?;
    let board = Hand::try_from(args.board.as_str())?;
    anyhow::ensure!(
        matches!(board.size(), 0 | 3 | 4 | 5),
        "board must have 0, 3, 4, or 5 cards, got {}",
        board.size()
    );
    let street = Street::from(board.size());
    let position = Position::try_from(args.position.as_str())?;
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let villain = match (&args.villain_position, &args.villain_action) {
        (Some(p), Some(a)) => Some(estimator::estimate(
            Position::try_from(p.as_str())?,
            Action::try_from(a.as_str())?,
            None,
        )),
        (None, Some(a)) => Some(estimator::estimate(
            Position::MP,
            Action::try_from(a.as_str())?,
            None,
        )),
        _ => None,
    };
    let ranges = villain
        .iter()
        .map(|v| v.holes())
        .collect::<Vec<Vec<Hole>>>();

    log::info!("simulating {} trials", args.trials);
    let outs = outs::count_outs(hole, board);
    let draws = draws::detect_draws(hole, board);
    let summary = equity::monte_carlo(hole, board, args.opponents, args.trials, &ranges, rng);
    let quick = equity::rule_of_4_and_2(outs.total, street);
    let decision = odds::decide(args.pot, args.call, summary.equity, args.stack);
    let class = classify::classify_preflop(hole);

    let snapshot = Snapshot {
        hole: Hand::from(hole).into_iter().map(|c| c.to_string()).collect(),
        board: board.into_iter().map(|c| c.to_string()).collect(),
        street: street.to_string(),
        position: position.to_string(),
        pot: args.pot,
        to_call: args.call,
        stack: args.stack,
        opponents: args.opponents,
        pot_odds_display: decision.pot_odds.to_string(),
        required_equity_pct: decision.required_equity,
        equity: summary.equity,
        outs: outs.total,
        flush_draw: draws.flush_draw,
        open_ended_straight_draw: draws.open_ended_straight_draw,
        gutshot_straight_draw: draws.gutshot_straight_draw,
        overcards: draws.overcards.len(),
        opponent_ranges: villain.iter().map(|v| v.description.clone()).collect(),
        preflop_aggressor: false,
        previous_actions: vec![],
    };
    let advice = Coach::new().advise(&snapshot);

    if args.json {
        let payload = serde_json::json!({
            "snapshot": snapshot,
            "class": dto::ApiClass::from(class),
            "outs": dto::ApiOuts::from(outs),
            "draws": dto::ApiDraws::from(draws),
            "equity": summary,
            "quick_equity": quick,
            "decision": dto::ApiDecision::from(decision),
            "villain_range": villain.map(dto::ApiRange::from),
            "advice": advice,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", "HAND".bold());
    println!(
        "  {} ({}, {})",
        args.hole.white().bold(),
        class.notation,
        class.tier
    );
    if board.size() > 0 {
        println!("  board: {}", board);
    }
    println!("{}", "EQUITY".bold());
    println!(
        "  {:.1}% over {} trials (win {:.1}%, tie {:.1}%)",
        summary.equity, summary.trials, summary.win_pct, summary.tie_pct
    );
    if quick.multiplier > 0 {
        println!(
            "  rule of {}: {} outs = ~{}%",
            quick.multiplier, quick.outs, quick.equity
        );
    }
    println!("{}", "DRAWS".bold());
    println!("  {} total outs", outs.total);
    if draws.flush_draw {
        println!("  flush draw ({} outs)", draws.flush_draw_outs);
    }
    if draws.open_ended_straight_draw {
        println!("  open-ended straight draw (8 outs)");
    }
    if draws.gutshot_straight_draw {
        println!("  gutshot straight draw (4 outs)");
    }
    if let Some(villain) = &villain {
        println!("{}", "VILLAIN".bold());
        println!(
            "  {} ({} hands, {:.1}% of combos)",
            villain.description,
            villain.hand_count(),
            villain.percentage()
        );
    }
    println!("{}", "DECISION".bold());
    println!(
        "  pot odds {} requiring {:.1}%",
        decision.pot_odds, decision.required_equity
    );
    let play = decision.play.to_string();
    let play = if decision.profitable {
        play.green().bold()
    } else {
        play.red().bold()
    };
    println!("  {} (EV {:+.2})", play, decision.expected_value);
    println!("  {}", decision.reasoning);
    if let Some(note) = &decision.implied_odds_note {
        println!("  {}", note.yellow());
    }
    println!();
    println!("{}", advice.advice);
    Ok(())
}
