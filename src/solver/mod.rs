pub mod branches;
pub use branches::*;

pub mod memo;
pub use memo::*;

pub mod outcome;
pub use outcome::*;

pub mod position;
pub use position::*;

pub mod solver;
pub use solver::*;
