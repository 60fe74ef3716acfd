pub mod parse;
pub mod payout;
pub mod play;

pub mod table;
pub use table::*;
