/// Failures surfaced by table construction, play, and solving.
///
/// None of these are recovered from internally. A caller processing many
/// records aborts the offending record and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A serialized card, hand, or table could not be parsed.
    MalformedInput(String),
    /// An internal invariant does not hold for the requested state.
    IllegalState(String),
    /// A card was drawn from an empty deck.
    ExhaustedDeck,
}

impl Error {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
    pub fn illegal(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(s) => write!(f, "malformed input: {}", s),
            Self::IllegalState(s) => write!(f, "illegal state: {}", s),
            Self::ExhaustedDeck => write!(f, "drew from an exhausted deck"),
        }
    }
}

impl std::error::Error for Error {}
