use thiserror::Error;

/// Failures raised while parsing wire-format inputs.
///
/// Malformed strings fail fast; nothing in the core silently coerces a bad
/// card, hand, or table key into a value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid card string: {0}")]
    ParseCard(String),

    #[error("invalid rank string: {0}")]
    ParseRank(String),

    #[error("invalid suit string: {0}")]
    ParseSuit(String),

    #[error("invalid hand string: {0}")]
    ParseHand(String),

    #[error("invalid hand notation: {0}")]
    ParseNotation(String),

    #[error("invalid position string: {0}")]
    ParsePosition(String),

    #[error("invalid action string: {0}")]
    ParseAction(String),

    #[error("invalid street string: {0}")]
    ParseStreet(String),
}
