use super::strategy::Strategy;
use crate::hands::*;
use crate::table::Table;
use crate::Error;
use crate::DEALER_STAND;

/// Hard total above which the naive player stops hitting.
const NAIVE_STAND: u8 = 11;

/// Stands on any hard total above eleven or soft total above seventeen,
/// hits otherwise. Never doubles, splits, or surrenders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl Strategy for Naive {
    fn decide(&self, table: &Table, seat: usize, hand: usize) -> Result<Decision, Error> {
        let hand = table.hand(seat, hand)?;
        match hand.hard() > NAIVE_STAND || hand.soft() > DEALER_STAND {
            true => Ok(Decision::Stand),
            false => Ok(Decision::Hit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HERO;

    fn decide(line: &str) -> Decision {
        Naive.decide(&Table::parse(line, 0).unwrap(), HERO, 0).unwrap()
    }

    #[test]
    fn stands_on_hard_sixteen() {
        assert_eq!(decide(",1F0C6,1F0AA,1F0B6"), Decision::Stand);
    }

    #[test]
    fn hits_low_totals() {
        assert_eq!(decide(",1F0C6,1F0A5,1F0B6"), Decision::Hit);
        assert_eq!(decide(",1F0C6,1F0A2,1F0B3"), Decision::Hit);
    }

    #[test]
    fn soft_totals() {
        assert_eq!(decide(",1F0C6,1F0A1,1F0B6"), Decision::Hit);
        assert_eq!(decide(",1F0C6,1F0A1,1F0B7"), Decision::Stand);
    }

    #[test]
    fn unknown_hand_is_an_error() {
        let table = Table::parse(",1F0C6,1F0AA,1F0B6", 0).unwrap();
        assert!(Naive.decide(&table, HERO, 3).is_err());
    }
}
