use super::strategy::Strategy;
use crate::hands::Decision;
use crate::solver::Outcome;
use crate::solver::Solver;
use crate::table::Table;
use crate::Error;
use crate::HERO;

/// Plays the hero exactly as the [`Solver`] recommends.
///
/// The solver always answers for the hero's first open hand, so the oracle
/// refuses any other seat or hand.
pub struct Oracle {
    solver: Solver,
}

impl From<Solver> for Oracle {
    fn from(solver: Solver) -> Self {
        Self { solver }
    }
}

impl Oracle {
    pub fn new() -> Result<Self, Error> {
        Solver::new().map(Self::from)
    }
    pub fn solver(&self) -> &Solver {
        &self.solver
    }
    /// Full solution for the table, including every decision's value.
    pub fn evaluate(&self, table: &Table) -> Result<Outcome, Error> {
        self.solver.solve(table)
    }
}

impl Strategy for Oracle {
    fn decide(&self, table: &Table, seat: usize, hand: usize) -> Result<Decision, Error> {
        if seat != HERO {
            return Err(Error::illegal(format!("oracle only plays seat {}", HERO)));
        }
        if table.active(HERO) != Some(hand) {
            return Err(Error::illegal(format!("hand {} is not the open hero hand", hand)));
        }
        self.evaluate(table)?
            .decision
            .ok_or_else(|| Error::illegal(format!("no decision for\n{}", table)))
    }
}
