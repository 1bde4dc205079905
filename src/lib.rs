//! Texas Hold'em decision analysis.
//!
//! The core is pure poker math: best-5-of-N hand evaluation over a bitset
//! card representation, Monte Carlo equity simulation with optional opponent
//! range sampling, exhaustive outs enumeration, draw pattern detection, and
//! a positional range estimation model. Everything is synchronous and
//! stateless per call; the only long-lived state is the read-only preflop
//! range table built once at startup.

pub mod advice;
pub mod analysis;
pub mod cards;
pub mod dto;
pub mod error;
pub mod ranges;

pub use error::Error;

/// Stack sizes, pot sizes, and bet amounts.
pub type Chips = f64;
/// Win probability expressed as a percentage in [0, 100].
pub type Equity = f64;

/// Random instance generation for testing and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Initialize terminal logging at INFO level.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
