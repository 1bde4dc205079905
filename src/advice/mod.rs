pub mod coach;
pub mod state;

pub use coach::Advice;
pub use coach::Coach;
pub use coach::Oracle;
pub use coach::Source;
pub use state::Snapshot;
