use alloc::vec::Vec;

use super::*;

/// Deals one pair per symbol and shuffles the arrangement uniformly at
/// random from an explicit seed, so a forced seed reproduces the same board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, symbols: &[Symbol]) -> Result<Deck> {
        use rand::prelude::*;

        let mut cards: Vec<Card> = symbols
            .iter()
            .enumerate()
            .flat_map(|(i, &symbol)| {
                let id = (i * 2) as CardId;
                [Card::face_down(id, symbol), Card::face_down(id + 1, symbol)]
            })
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        cards.shuffle(&mut rng);

        Deck::from_cards(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn shuffle_preserves_the_symbol_multiset() {
        let deck = ShuffledDeckGenerator::new(42)
            .generate(&Symbol::ALL)
            .unwrap();

        assert_eq!(deck.card_count() as usize, Symbol::ALL.len() * 2);
        for symbol in Symbol::ALL {
            let twins = deck.iter().filter(|card| card.symbol == symbol).count();
            assert_eq!(twins, 2);
        }
        assert!(deck.iter().all(|card| !card.face_up && !card.matched));
    }

    #[test]
    fn same_seed_deals_the_same_arrangement() {
        let a = ShuffledDeckGenerator::new(9).generate(&Symbol::ALL).unwrap();
        let b = ShuffledDeckGenerator::new(9).generate(&Symbol::ALL).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_may_rearrange() {
        let arrangements: Vec<Deck> = (0..8)
            .map(|seed| {
                ShuffledDeckGenerator::new(seed)
                    .generate(&Symbol::ALL)
                    .unwrap()
            })
            .collect();

        // not a randomness test, just a sanity check that the seed matters
        assert!(arrangements.iter().any(|deck| deck != &arrangements[0]));
    }

    #[test]
    fn empty_symbol_set_is_rejected() {
        assert_eq!(
            ShuffledDeckGenerator::new(1).generate(&[]),
            Err(CeremonyError::EmptyDeck)
        );
    }
}
