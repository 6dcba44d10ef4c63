use serde::{Deserialize, Serialize};

/// Identifier of a single card within a deck.
pub type CardId = u8;

/// Count type used for pair and card counts.
pub type CardCount = u8;

/// Abstract monotonic time unit driving the particle field. The caller owns
/// the clock; one tick is one scheduler callback.
pub type Tick = u32;

/// The fixed small symbol set of the celebration theme, shared by the
/// matching deck and the decorative particles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Heart,
    Star,
    Gift,
    Sparkle,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::Heart, Symbol::Star, Symbol::Gift, Symbol::Sparkle];
}

/// Palette slot carried by a particle; the presentation layer decides what
/// each slot actually looks like.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    Primary,
    Accent,
    Secondary,
    Pink,
    Purple,
}

impl ColorTag {
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Primary,
        ColorTag::Accent,
        ColorTag::Secondary,
        ColorTag::Pink,
        ColorTag::Purple,
    ];
}
