pub mod naive;
pub use naive::*;

pub mod oracle;
pub use oracle::*;

pub mod strategy;
pub use strategy::*;
