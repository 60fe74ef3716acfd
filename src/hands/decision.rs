use crate::Error;

/// An action the hero can take on a non-final hand.
///
/// The declaration order is also the tie-break order when two decisions
/// have equal expected value: the earlier one wins.
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Decision {
    Hit,
    Stand,
    Double,
    Split,
    Surrender,
}

impl Decision {
    pub const fn all() -> [Decision; 5] {
        [
            Decision::Hit,
            Decision::Stand,
            Decision::Double,
            Decision::Split,
            Decision::Surrender,
        ]
    }
}

impl TryFrom<&str> for Decision {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "HIT" | "H" => Ok(Decision::Hit),
            "STAND" | "STAY" | "S" => Ok(Decision::Stand),
            "DOUBLE" | "D" => Ok(Decision::Double),
            "SPLIT" | "P" => Ok(Decision::Split),
            "SURRENDER" | "R" => Ok(Decision::Surrender),
            _ => Err(Error::malformed(format!("unknown decision {:?}", s))),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Decision::Hit => "HIT",
                Decision::Stand => "STAND",
                Decision::Double => "DOUBLE",
                Decision::Split => "SPLIT",
                Decision::Surrender => "SURRENDER",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_roundtrip() {
        for decision in Decision::all() {
            assert_eq!(Decision::try_from(decision.to_string().as_str()), Ok(decision));
        }
        assert_eq!(Decision::try_from("stay"), Ok(Decision::Stand));
    }

    #[test]
    fn tie_break_order() {
        let all = Decision::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
