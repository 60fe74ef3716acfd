use crate::cards::Card;
use crate::hands::Decision;
use crate::table::Table;
use crate::Error;
use crate::Probability;
use crate::HERO;

/// A child table together with the probability of reaching it.
pub type Branch = (Probability, Table);

/// Chance outcomes reachable from a table, one forced draw per remaining
/// rank. The probabilities of each returned set sum to one.
impl Table {
    /// Children of the dealer drawing one card.
    pub fn reveals(&self) -> Result<Vec<Branch>, Error> {
        self.draws(|child, card| {
            child.hit_dealer(card);
            Ok(())
        })
    }

    /// Children of the hero taking `decision` on hand `index`.
    pub fn branches(&self, index: usize, decision: Decision) -> Result<Vec<Branch>, Error> {
        match decision {
            Decision::Stand => {
                let mut child = self.clone();
                child.stand(HERO, index)?;
                Ok(vec![(1., child)])
            }
            Decision::Surrender => {
                let mut child = self.clone();
                child.surrender(HERO, index)?;
                Ok(vec![(1., child)])
            }
            Decision::Hit => self.draws(|child, card| child.hit(HERO, index, card)),
            Decision::Double => self.draws(|child, card| child.double(HERO, index, card)),
            Decision::Split => self.splits(index),
        }
    }

    /// One child per remaining rank, with a card of that rank taken from
    /// the deck and handed to `apply`.
    fn draws<F>(&self, apply: F) -> Result<Vec<Branch>, Error>
    where
        F: Fn(&mut Table, Card) -> Result<(), Error>,
    {
        let odds = self.deck().probabilities();
        if odds.is_empty() {
            return Err(Error::ExhaustedDeck);
        }
        odds.into_iter()
            .map(|(rank, p)| {
                let mut child = self.clone();
                let card = child.take(rank)?;
                apply(&mut child, card)?;
                Ok((p, child))
            })
            .collect()
    }

    /// One child per ordered pair of ranks dealt to the left and right
    /// halves. The second draw is conditioned on the first.
    fn splits(&self, index: usize) -> Result<Vec<Branch>, Error> {
        let mut branches = Vec::new();
        for (left, p) in self.deck().probabilities() {
            let mut once = self.clone();
            let left = once.take(left)?;
            let odds = once.deck().probabilities();
            if odds.is_empty() {
                return Err(Error::ExhaustedDeck);
            }
            for (right, q) in odds {
                let mut child = once.clone();
                let right = child.take(right)?;
                child.split(HERO, index, left, right)?;
                branches.push((p * q, child));
            }
        }
        match branches.is_empty() {
            true => Err(Error::ExhaustedDeck),
            false => Ok(branches),
        }
    }
}
