use crate::hands::Decision;
use crate::Utility;

/// Result of solving one position.
///
/// `decision` is `None` at terminal and dealer positions, where the hero has
/// nothing to choose; `values` is then empty. At a hero decision it holds
/// the expected value of every legal decision in tie-break order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Outcome {
    pub decision: Option<Decision>,
    pub value: Utility,
    pub values: Vec<(Decision, Utility)>,
}

impl Outcome {
    /// A position with no decision left to make.
    pub fn forced(value: Utility) -> Self {
        Self {
            decision: None,
            value,
            values: Vec::new(),
        }
    }
    /// Picks the highest expected value. Earlier entries win ties.
    pub fn best(values: Vec<(Decision, Utility)>) -> Option<Self> {
        let (decision, value) = values.iter().copied().fold(None, |best, (d, v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((d, v)),
        })?;
        Some(Self {
            decision: Some(decision),
            value,
            values,
        })
    }
    /// Expected value of one specific decision, if it was legal here.
    pub fn value_of(&self, decision: Decision) -> Option<Utility> {
        self.values
            .iter()
            .find(|(d, _)| *d == decision)
            .map(|(_, v)| *v)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.decision {
            Some(decision) => write!(f, "{} {:+.6}", decision, self.value),
            None => write!(f, "{:+.6}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_value_wins() {
        let outcome = Outcome::best(vec![
            (Decision::Hit, -0.4),
            (Decision::Stand, -0.1),
            (Decision::Surrender, -0.5),
        ])
        .unwrap();
        assert_eq!(outcome.decision, Some(Decision::Stand));
        assert_eq!(outcome.value, -0.1);
        assert_eq!(outcome.value_of(Decision::Hit), Some(-0.4));
        assert_eq!(outcome.value_of(Decision::Split), None);
    }

    #[test]
    fn ties_go_to_the_earlier_decision() {
        let outcome = Outcome::best(vec![
            (Decision::Hit, 0.25),
            (Decision::Stand, 0.25),
            (Decision::Double, 0.25),
        ])
        .unwrap();
        assert_eq!(outcome.decision, Some(Decision::Hit));
    }

    #[test]
    fn negative_values_are_not_ignored() {
        let outcome = Outcome::best(vec![(Decision::Hit, -0.9), (Decision::Stand, -0.7)]).unwrap();
        assert_eq!(outcome.decision, Some(Decision::Stand));
        assert_eq!(outcome.value, -0.7);
    }

    #[test]
    fn nothing_to_choose_from() {
        assert_eq!(Outcome::best(Vec::new()), None);
    }
}
