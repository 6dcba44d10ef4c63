#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use countdown::*;
pub use error::*;
pub use generator::*;
pub use memory::*;
pub use particles::*;
pub use sequence::*;
pub use types::*;

mod card;
mod countdown;
mod error;
mod generator;
mod memory;
mod particles;
mod sequence;
mod types;

/// A complete set of paired cards, every card face-down. The arrangement is
/// whatever order the cards were handed in; generators decide the shuffle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck from explicit cards, checking the pairing invariants:
    /// unique ids and every symbol present exactly twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() {
            return Err(CeremonyError::EmptyDeck);
        }

        for (i, card) in cards.iter().enumerate() {
            if cards[..i].iter().any(|other| other.id == card.id) {
                return Err(CeremonyError::DuplicateCard);
            }
        }

        for card in &cards {
            let twins = cards
                .iter()
                .filter(|other| other.symbol == card.symbol)
                .count();
            if twins != 2 {
                return Err(CeremonyError::UnpairedSymbol);
            }
        }

        Ok(Self { cards })
    }

    /// Builds an unshuffled deck over the given symbols, ids assigned in
    /// order. Mostly useful for tests; the real app goes through a
    /// [`DeckGenerator`].
    pub fn sequential(symbols: &[Symbol]) -> Result<Self> {
        let cards = symbols
            .iter()
            .enumerate()
            .flat_map(|(i, &symbol)| {
                let id = (i * 2) as CardId;
                [Card::face_down(id, symbol), Card::face_down(id + 1, symbol)]
            })
            .collect();
        Self::from_cards(cards)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn card_count(&self) -> CardCount {
        self.cards.len() as CardCount
    }

    pub fn pair_count(&self) -> CardCount {
        self.card_count() / 2
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    /// First card of a pair turned face-up.
    Flipped,
    /// Second card turned face-up; the caller owes a [`MatchEngine::resolve_pair`]
    /// after its visual-feedback delay.
    PairUp,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flipped => true,
            Self::PairUp => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    /// The pair agreed and is now locked in.
    Matched,
    /// The pair disagreed and went back face-down.
    Mismatched,
    /// The pair agreed and it was the last one.
    Completed,
}

impl ResolveOutcome {
    pub const fn is_match(self) -> bool {
        match self {
            Self::Matched => true,
            Self::Mismatched => false,
            Self::Completed => true,
        }
    }
}
