pub mod draws;
pub use draws::*;

pub mod equity;
pub use equity::*;

pub mod odds;
pub use odds::*;

pub mod outs;
pub use outs::*;
