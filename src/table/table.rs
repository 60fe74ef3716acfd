use crate::cards::*;
use crate::hands::*;
use crate::Error;
use crate::DEALER_STAND;

/// The state of one blackjack round.
///
/// `Table` owns the undrawn [`Deck`], the [`DealerHand`], and an ordered list
/// of seats, each an ordered list of [`PlayerHand`]s. A seat only holds more
/// than one hand after splitting. Seat [`HERO`] is the one whose decisions
/// are optimized; the others are spectators whose cards only change what is
/// left in the deck.
///
/// # Invariant
///
/// The dealer's cards, every seat's cards, and the deck partition the 52
/// cards: nothing is duplicated and nothing is lost. Every transition moves
/// cards out of the deck through [`draw`](Self::draw) or
/// [`take`](Self::take) before placing them in a hand.
///
/// Hands are addressed by `(seat, index)` into [`seats`](Self::seats).
///
/// [`HERO`]: crate::HERO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    deck: Deck,
    dealer: DealerHand,
    seats: Vec<Vec<PlayerHand>>,
}

impl Table {
    /// Assembles a table from its parts. The caller is responsible for the
    /// deck being the complement of the visible cards.
    pub fn new(deck: Deck, dealer: DealerHand, seats: Vec<Vec<PlayerHand>>) -> Self {
        Self {
            deck,
            dealer,
            seats,
        }
    }
    /// Assembles a table whose deck is every card not visible in the hands.
    pub fn from_hands(dealer: DealerHand, seats: Vec<Vec<PlayerHand>>) -> Self {
        let mut deck = Deck::new();
        deck.remove_all(dealer.cards());
        for hand in seats.iter().flatten() {
            deck.remove_all(hand.cards());
        }
        Self::new(deck, dealer, seats)
    }
}

/// Public state accessors.
impl Table {
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn dealer(&self) -> &DealerHand {
        &self.dealer
    }
    pub fn seats(&self) -> &[Vec<PlayerHand>] {
        &self.seats
    }
    pub fn seat(&self, seat: usize) -> Result<&[PlayerHand], Error> {
        self.seats
            .get(seat)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::illegal(format!("no seat {}", seat)))
    }
    pub fn hand(&self, seat: usize, index: usize) -> Result<&PlayerHand, Error> {
        self.seat(seat)?
            .get(index)
            .ok_or_else(|| Error::illegal(format!("no hand {} in seat {}", index, seat)))
    }
    /// Index of the first hand in the seat still awaiting a decision.
    pub fn active(&self, seat: usize) -> Option<usize> {
        self.seats
            .get(seat)
            .and_then(|hands| hands.iter().position(|h| !h.is_final()))
    }
    /// Every card currently face up on the table.
    pub fn visible(&self) -> Vec<Card> {
        self.dealer
            .cards()
            .iter()
            .chain(self.seats.iter().flatten().flat_map(|h| h.cards().iter()))
            .copied()
            .collect()
    }

    fn hand_mut(&mut self, seat: usize, index: usize) -> Result<&mut PlayerHand, Error> {
        self.seats
            .get_mut(seat)
            .and_then(|hands| hands.get_mut(index))
            .ok_or_else(|| Error::illegal(format!("no hand {} in seat {}", index, seat)))
    }
    fn open_mut(&mut self, seat: usize, index: usize) -> Result<&mut PlayerHand, Error> {
        let hand = self.hand_mut(seat, index)?;
        match hand.is_final() {
            true => Err(Error::illegal(format!("hand {} is already final", hand))),
            false => Ok(hand),
        }
    }
}

/// Cards leaving the deck.
impl Table {
    /// Draws a random card from the deck.
    pub fn draw(&mut self) -> Result<Card, Error> {
        self.deck.draw()
    }
    /// Draws a card of the given rank, forcing a chance outcome.
    pub fn take(&mut self, rank: Rank) -> Result<Card, Error> {
        self.deck
            .remove_rank(rank)
            .ok_or_else(|| Error::illegal(format!("no {} left in the deck", rank)))
    }
}

/// Player transitions.
impl Table {
    /// Adds a card; a bust ends the hand.
    pub fn hit(&mut self, seat: usize, index: usize, card: Card) -> Result<(), Error> {
        let hand = self.open_mut(seat, index)?;
        hand.push(card);
        if hand.is_bust() {
            hand.finalize();
        }
        Ok(())
    }
    pub fn stand(&mut self, seat: usize, index: usize) -> Result<(), Error> {
        self.open_mut(seat, index)?.finalize();
        Ok(())
    }
    /// Adds exactly one card at twice the bet and ends the hand.
    pub fn double(&mut self, seat: usize, index: usize, card: Card) -> Result<(), Error> {
        let hand = self.open_mut(seat, index)?;
        hand.push(card);
        hand.double_bet();
        hand.finalize();
        Ok(())
    }
    pub fn surrender(&mut self, seat: usize, index: usize) -> Result<(), Error> {
        let hand = self.open_mut(seat, index)?;
        hand.surrender();
        hand.finalize();
        Ok(())
    }
    /// Splits a pair into two single-bet hands, one new card each.
    ///
    /// The split hand is removed and the two children are inserted at the
    /// front of the seat, left then right. Returns their indices.
    pub fn split(
        &mut self,
        seat: usize,
        index: usize,
        left: Card,
        right: Card,
    ) -> Result<(usize, usize), Error> {
        let hand = self.open_mut(seat, index)?;
        let (a, b) = match hand.cards() {
            [a, b] if hand.is_pair() => (*a, *b),
            _ => return Err(Error::illegal(format!("cannot split {}", hand))),
        };
        let hands = &mut self.seats[seat];
        hands.remove(index);
        hands.insert(0, PlayerHand::from((b, right)));
        hands.insert(0, PlayerHand::from((a, left)));
        Ok((0, 1))
    }
}

/// Dealer transitions.
impl Table {
    /// Adds a card to the dealer and applies the fixed stopping rule:
    /// stop on bust, on a soft total above seventeen, or on a hard
    /// total of at least seventeen.
    pub fn hit_dealer(&mut self, card: Card) {
        let dealer = &mut self.dealer;
        dealer.push(card);
        if dealer.is_bust() {
            dealer.finalize();
        } else if dealer.is_soft() {
            if dealer.soft() > DEALER_STAND {
                dealer.finalize();
            }
        } else if dealer.hard() >= DEALER_STAND {
            dealer.finalize();
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "D: {}", self.dealer)?;
        for (i, hands) in self.seats.iter().enumerate() {
            write!(f, "P{}:", i + 1)?;
            for hand in hands {
                write!(f, " {}", hand)?;
            }
            writeln!(f)?;
        }
        write!(f, "Deck: {} cards", self.deck.size())
    }
}
