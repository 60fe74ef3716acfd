use super::card::Card;
use super::rank::Rank;
use crate::Error;
use crate::Probability;
use std::collections::BTreeMap;

/// The undrawn cards, as a 52-bit set.
///
/// A deck only encodes *what is left*, never turn order, so drawing a
/// uniformly random member is the same as drawing the top card of a
/// shuffled sequence. Being `Copy`, a deck is duplicated for free whenever
/// a branch of the game tree is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deck(u64);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Self::mask())
    }
    /// Creates a deck with no cards.
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// Number of undrawn cards of the given rank.
    pub fn count(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }
    /// Removes a specific card, returning whether it was present.
    pub fn remove(&mut self, card: Card) -> bool {
        let present = self.contains(&card);
        self.0 &= !u64::from(card);
        present
    }
    /// Removes every listed card. Absent cards are ignored.
    pub fn remove_all<'a, I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = &'a Card>,
    {
        for card in cards {
            self.remove(*card);
        }
    }
    /// Removes some card of the given rank, if one remains.
    ///
    /// Used to force a particular draw when enumerating chance outcomes.
    pub fn remove_rank(&mut self, rank: Rank) -> Option<Card> {
        match self.0 & u64::from(rank) {
            0 => None,
            bits => {
                let card = Card::from(bits.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
    /// Draws and removes a uniformly random card.
    pub fn draw(&mut self) -> Result<Card, Error> {
        if self.is_empty() {
            return Err(Error::ExhaustedDeck);
        }
        let n = self.size();
        let i = rand::random_range(0..n);
        let mut deck = self.0;
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.remove(card);
        Ok(card)
    }
    /// Probability of drawing each rank that is still represented.
    ///
    /// Ranks with no remaining cards are omitted rather than mapped to zero.
    pub fn probabilities(&self) -> BTreeMap<Rank, Probability> {
        let total = self.size() as Probability;
        Rank::all()
            .into_iter()
            .map(|rank| (rank, self.count(rank)))
            .filter(|(_, n)| *n > 0)
            .map(|(rank, n)| (rank, n as Probability / total))
            .collect()
    }
    /// Remaining cards in encoding order.
    pub fn cards(&self) -> Vec<Card> {
        let mut bits = self.0;
        let mut cards = Vec::with_capacity(self.size());
        while bits > 0 {
            cards.push(Card::from(bits.trailing_zeros() as u8));
            bits &= bits - 1;
        }
        cards
    }

    const fn mask() -> u64 {
        (1 << 52) - 1
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
