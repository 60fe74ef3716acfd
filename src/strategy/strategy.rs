use crate::hands::Decision;
use crate::table::Table;
use crate::Error;

/// Chooses what a seat does with one of its open hands.
///
/// `hand` indexes into the seat and always refers to a non-final hand when
/// called from [`Table::play_seat`].
pub trait Strategy {
    fn decide(&self, table: &Table, seat: usize, hand: usize) -> Result<Decision, Error>;
}
