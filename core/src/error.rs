use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CeremonyError {
    #[error("No card with that id exists in the deck")]
    UnknownCard,
    #[error("Deck must contain at least one pair")]
    EmptyDeck,
    #[error("Duplicate card id in deck")]
    DuplicateCard,
    #[error("Every symbol in a deck must appear exactly twice")]
    UnpairedSymbol,
    #[error("No face-up pair is awaiting resolution")]
    NothingToResolve,
    #[error("Transition not allowed from the current stage")]
    InvalidTransition,
}

pub type Result<T> = core::result::Result<T, CeremonyError>;
