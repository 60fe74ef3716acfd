pub mod dealer;
pub use dealer::*;

pub mod decision;
pub use decision::*;

pub mod hand;
pub use hand::Hand;

pub mod player;
pub use player::*;
