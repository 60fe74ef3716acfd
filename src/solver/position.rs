use crate::cards::*;
use crate::hands::*;
use crate::table::Table;
use crate::HERO;

/// Count of each rank in a collection of cards.
pub type Bag = [u8; Rank::COUNT];

fn bag<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Bag {
    let mut bag = Bag::default();
    for card in cards {
        bag[u8::from(card.rank()) as usize] += 1;
    }
    bag
}

/// A hero hand with suits and card order forgotten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    ranks: Vec<Rank>,
    bet: u8,
    surrendered: bool,
    done: bool,
}

impl From<&PlayerHand> for Shape {
    fn from(hand: &PlayerHand) -> Self {
        let mut ranks = hand.cards().iter().map(Card::rank).collect::<Vec<_>>();
        ranks.sort();
        Self {
            ranks,
            bet: hand.multiple(),
            surrendered: hand.surrendered(),
            done: hand.is_final(),
        }
    }
}

/// Everything about a table that can change its expected value.
///
/// Suits never matter, so the dealer and the other seats collapse into
/// independent rank bags, and the deck needs no field of its own since it
/// is the complement of what is shown. Hero hands keep their individual
/// shapes. Open hands stay in seat order, because the first one is the hand
/// being decided; settled hands are sorted since only their payouts remain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Canon {
    pending: Vec<Shape>,
    settled: Vec<Shape>,
    others: Bag,
    dealer: Bag,
    done: bool,
}

impl From<&Table> for Canon {
    fn from(table: &Table) -> Self {
        let hero = table.seats().get(HERO).map(Vec::as_slice).unwrap_or_default();
        let (settled, pending) = hero.iter().partition::<Vec<_>, _>(|h| h.is_final());
        let mut settled = settled.into_iter().map(Shape::from).collect::<Vec<_>>();
        settled.sort();
        Self {
            pending: pending.into_iter().map(Shape::from).collect(),
            settled,
            others: bag(table
                .seats()
                .iter()
                .enumerate()
                .filter(|(seat, _)| *seat != HERO)
                .flat_map(|(_, hands)| hands.iter())
                .flat_map(|hand| hand.cards().iter())),
            dealer: bag(table.dealer().cards()),
            done: table.dealer().is_final(),
        }
    }
}

/// A reachable table, keyed by its [`Canon`].
///
/// Two positions are equal exactly when their canonical forms are, so every
/// table that differs only by suits or by the arrangement of cards among
/// the other seats shares one memo entry. The hands of the first table seen
/// for a key are kept so that a table can be rebuilt to generate children.
#[derive(Debug, Clone)]
pub struct Position {
    table: Table,
    canon: Canon,
}

impl Position {
    /// A fresh table holding the same hands, with the deck rebuilt as the
    /// complement of every visible card.
    pub fn into_table(self) -> Table {
        let dealer = self.table.dealer().clone();
        let seats = self.table.seats().to_vec();
        Table::from_hands(dealer, seats)
    }
}

impl From<Table> for Position {
    fn from(table: Table) -> Self {
        let canon = Canon::from(&table);
        Self { table, canon }
    }
}

impl From<Position> for Table {
    fn from(position: Position) -> Self {
        position.into_table()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.canon == other.canon
    }
}
impl Eq for Position {}
impl std::hash::Hash for Position {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canon.hash(state);
    }
}
