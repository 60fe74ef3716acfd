//! Exact-optimal blackjack decisions.
//!
//! The crate models a blackjack table (cards, deck, player and dealer hands,
//! seats) together with every state transition of a round, and solves the
//! hero seat exactly: for any reachable table it computes the expected return
//! of each legal [`Decision`] by recursive expectation over every possible
//! draw, memoized on a canonical [`Position`] and evaluated concurrently.
//!
//! ## Layout
//!
//! - [`cards`] — [`Rank`], [`Suit`], [`Card`] and the remaining [`Deck`]
//! - [`hands`] — the [`Hand`] valuation trait, [`PlayerHand`], [`DealerHand`]
//! - [`table`] — the [`Table`] state machine, dealer auto-play and payouts
//! - [`solver`] — [`Position`] canonicalization and the single-flight [`Solver`]
//! - [`strategy`] — the [`Strategy`] seam with [`Naive`] and [`Oracle`]
//!
//! [`Rank`]: cards::Rank
//! [`Suit`]: cards::Suit
//! [`Card`]: cards::Card
//! [`Deck`]: cards::Deck
//! [`Hand`]: hands::Hand
//! [`Decision`]: hands::Decision
//! [`PlayerHand`]: hands::PlayerHand
//! [`DealerHand`]: hands::DealerHand
//! [`Table`]: table::Table
//! [`Position`]: solver::Position
//! [`Solver`]: solver::Solver
//! [`Strategy`]: strategy::Strategy
//! [`Naive`]: strategy::Naive
//! [`Oracle`]: strategy::Oracle
pub mod cards;
pub mod error;
pub mod hands;
pub mod solver;
pub mod strategy;
pub mod table;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Earnings and expected values, in units of the initial bet.
pub type Utility = f64;
/// Draw probabilities.
pub type Probability = f64;

// ============================================================================
// TABLE RULES
// ============================================================================
/// Cards in a single deck.
pub const DECK_SIZE: usize = 52;
/// Seat index of the player whose decisions are optimized.
pub const HERO: usize = 0;
/// Best possible hand total.
pub const BLACKJACK: u8 = 21;
/// Extra value of one ace counted as eleven instead of one.
pub const SOFT_BONUS: u8 = 10;
/// Dealer stops drawing at this hard total (soft totals must exceed it).
pub const DEALER_STAND: u8 = 17;
/// Doubling is only offered up to this hard total.
pub const DOUBLE_LIMIT: u8 = 11;
/// Payout multiple of a natural blackjack.
pub const BLACKJACK_PAYOUT: Utility = 1.5;
/// Fraction of the bet lost by surrendering.
pub const SURRENDER_LOSS: Utility = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Number of solver evaluations between progress log messages.
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
