use super::memo::Memo;
use super::outcome::Outcome;
use super::position::Position;
use crate::hands::*;
use crate::table::Table;
use crate::Error;
use crate::Probability;
use crate::Utility;
use crate::HERO;
use crate::PROGRESS_INTERVAL;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Shared state of the expectation search, owned by every in-flight task.
struct Search {
    memo: Arc<Memo<Position, Outcome>>,
    calls: AtomicUsize,
}

impl Search {
    fn request(self: &Arc<Self>, table: Table) -> BoxFuture<'static, Result<Outcome, Error>> {
        let position = Position::from(table);
        let search = Arc::clone(self);
        self.memo
            .fetch(position.clone(), move || search.evaluate(position))
    }

    fn evaluate(self: Arc<Self>, position: Position) -> BoxFuture<'static, Result<Outcome, Error>> {
        async move {
            let calls = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
            if calls % PROGRESS_INTERVAL == 0 {
                log::debug!("evaluated {:>10} positions, {:>10} memoized", calls, self.memo.len());
            }
            let table = Table::from(position);
            if let Some(index) = table.active(HERO) {
                return self.decide(&table, index).await;
            }
            if table.dealer().is_final() || Self::settled(&table)? {
                return Ok(Outcome::forced(table.earnings(HERO)?));
            }
            self.expect(table.reveals()?).await.map(Outcome::forced)
        }
        .boxed()
    }

    /// Hero hands that surrendered or busted pay the same whatever the
    /// dealer ends up with.
    fn settled(table: &Table) -> Result<bool, Error> {
        Ok(table
            .seat(HERO)?
            .iter()
            .all(|hand| hand.surrendered() || hand.is_bust()))
    }

    /// Probability-weighted value of a set of children.
    async fn expect(self: &Arc<Self>, branches: Vec<(Probability, Table)>) -> Result<Utility, Error> {
        let (odds, children) = branches.into_iter().unzip::<_, _, Vec<_>, Vec<_>>();
        let outcomes = futures::future::join_all(children.into_iter().map(|t| self.request(t))).await;
        odds.into_iter()
            .zip(outcomes)
            .map(|(p, outcome)| outcome.map(|o| p * o.value))
            .sum()
    }

    /// Requests the children of every legal decision at once, then picks
    /// the one with the highest expectation.
    async fn decide(self: &Arc<Self>, table: &Table, index: usize) -> Result<Outcome, Error> {
        let decisions = table.hand(HERO, index)?.decisions()?;
        let branches = decisions
            .iter()
            .map(|decision| table.branches(index, *decision))
            .collect::<Result<Vec<_>, _>>()?;
        let values = futures::future::join_all(branches.into_iter().map(|b| self.expect(b)))
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        Outcome::best(decisions.into_iter().zip(values).collect())
            .ok_or_else(|| Error::illegal(format!("no legal decision for {}", table)))
    }
}

/// Exact expected-value solver for the hero seat.
///
/// Every position reachable from a solved table is evaluated once and
/// memoized for the lifetime of the solver, so repeated and overlapping
/// queries get cheaper. Work is spread over a dedicated multi-threaded
/// tokio runtime; `solve` blocks the caller until the answer is known.
pub struct Solver {
    runtime: tokio::runtime::Runtime,
    search: Arc<Search>,
}

impl Solver {
    /// A solver with one worker per logical CPU.
    pub fn new() -> Result<Self, Error> {
        Self::with_threads(num_cpus::get())
    }
    pub fn with_threads(threads: usize) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(threads.max(1))
            .thread_name("solver")
            .build()
            .map_err(|e| Error::illegal(format!("failed to start solver runtime: {}", e)))?;
        log::debug!("solver running on {} threads", threads.max(1));
        Ok(Self {
            runtime,
            search: Arc::new(Search {
                memo: Arc::new(Memo::default()),
                calls: AtomicUsize::new(0),
            }),
        })
    }

    /// Expected value of the table under optimal play, and the best
    /// decision for the hero's first open hand if there is one.
    pub fn solve(&self, table: &Table) -> Result<Outcome, Error> {
        let search = Arc::clone(&self.search);
        let table = table.clone();
        self.runtime.block_on(async move { search.request(table).await })
    }

    /// Positions evaluated so far. Cache hits do not count.
    pub fn computed(&self) -> usize {
        self.search.calls.load(Ordering::Relaxed)
    }
    /// Positions held in the memo.
    pub fn len(&self) -> usize {
        self.search.memo.len()
    }
    pub fn is_empty(&self) -> bool {
        self.search.memo.is_empty()
    }
}
