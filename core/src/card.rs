use serde::{Deserialize, Serialize};

use crate::types::{CardId, Symbol};

/// One tile of the matching game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub face_up: bool,
    pub matched: bool,
}

impl Card {
    pub const fn face_down(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Whether selecting this card can still do anything.
    pub const fn is_selectable(&self) -> bool {
        !self.matched && !self.face_up
    }

    // whether the card is visually showing its symbol
    pub const fn is_revealed(&self) -> bool {
        self.face_up || self.matched
    }
}
