pub mod action;
pub mod classify;
pub mod estimator;
pub mod narrow;
pub mod notation;
pub mod position;
pub mod tables;

pub use action::Action;
pub use classify::Class;
pub use classify::Tier;
pub use estimator::RangeEstimate;
pub use narrow::Narrowed;
pub use notation::Notation;
pub use position::Position;
