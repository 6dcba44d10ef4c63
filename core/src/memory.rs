use serde::{Deserialize, Serialize};

use crate::*;

/// Valid phase changes:
/// - Browsing -> Resolving (second card of a pair turned face-up)
/// - Resolving -> Browsing (pair disagreed, or agreed with pairs left)
/// - Resolving -> Complete (last pair agreed)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Zero or one card face-up, selections accepted
    Browsing,
    /// Two cards face-up, waiting for the deferred resolution
    Resolving,
    /// Every pair matched, no further selections accepted
    Complete,
}

impl MatchPhase {
    pub const fn accepts_selection(self) -> bool {
        matches!(self, Self::Browsing)
    }
}

/// The pair-matching game from deal to completion. Pure state machine: the
/// visual-feedback delay between [`MatchEngine::select`] turning up a pair and
/// [`MatchEngine::resolve_pair`] deciding its fate belongs to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    deck: Deck,
    first_up: Option<CardId>,
    pending: Option<(CardId, CardId)>,
    move_count: u32,
    matched_pairs: CardCount,
}

impl MatchEngine {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            first_up: None,
            pending: None,
            move_count: 0,
            matched_pairs: 0,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn matched_pairs(&self) -> CardCount {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> CardCount {
        self.deck.pair_count()
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.deck.pair_count()
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_complete() {
            MatchPhase::Complete
        } else if self.pending.is_some() {
            MatchPhase::Resolving
        } else {
            MatchPhase::Browsing
        }
    }

    /// The pair currently awaiting resolution, if any.
    pub fn pending_pair(&self) -> Option<(CardId, CardId)> {
        self.pending
    }

    /// Turns a card face-up. Ignored while a pair awaits resolution, after
    /// completion, and for matched or already face-up cards; an id outside
    /// the deck is an error the UI treats the same as a no-op.
    pub fn select(&mut self, id: CardId) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let card = self.deck.card(id).ok_or(CeremonyError::UnknownCard)?;

        if !self.phase().accepts_selection() || !card.is_selectable() {
            return Ok(NoChange);
        }

        self.deck
            .card_mut(id)
            .expect("card existence checked above")
            .face_up = true;

        Ok(match self.first_up.take() {
            None => {
                self.first_up = Some(id);
                Flipped
            }
            Some(first) => {
                self.move_count += 1;
                self.pending = Some((first, id));
                log::debug!("pair up: {} and {}", first, id);
                PairUp
            }
        })
    }

    /// Settles the face-up pair: locks both cards in when the symbols agree,
    /// turns both back face-down otherwise.
    pub fn resolve_pair(&mut self) -> Result<ResolveOutcome> {
        use ResolveOutcome::*;

        let (first, second) = self.pending.take().ok_or(CeremonyError::NothingToResolve)?;

        let first_symbol = self.card_symbol(first)?;
        let second_symbol = self.card_symbol(second)?;

        Ok(if first_symbol == second_symbol {
            for id in [first, second] {
                let card = self.deck.card_mut(id).ok_or(CeremonyError::UnknownCard)?;
                card.matched = true;
                card.face_up = false;
            }
            self.matched_pairs += 1;
            log::debug!(
                "pair matched, {}/{} done",
                self.matched_pairs,
                self.deck.pair_count()
            );
            if self.is_complete() { Completed } else { Matched }
        } else {
            for id in [first, second] {
                self.deck.card_mut(id).ok_or(CeremonyError::UnknownCard)?.face_up = false;
            }
            Mismatched
        })
    }

    fn card_symbol(&self, id: CardId) -> Result<Symbol> {
        self.deck
            .card(id)
            .map(|card| card.symbol)
            .ok_or(CeremonyError::UnknownCard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn engine() -> MatchEngine {
        MatchEngine::new(Deck::sequential(&Symbol::ALL).unwrap())
    }

    fn twin_ids(engine: &MatchEngine, symbol: Symbol) -> (CardId, CardId) {
        let ids: Vec<CardId> = engine
            .deck()
            .iter()
            .filter(|card| card.symbol == symbol)
            .map(|card| card.id)
            .collect();
        (ids[0], ids[1])
    }

    #[test]
    fn deal_produces_each_symbol_exactly_twice() {
        let engine = engine();

        assert_eq!(engine.deck().card_count(), 8);
        for symbol in Symbol::ALL {
            let twins = engine
                .deck()
                .iter()
                .filter(|card| card.symbol == symbol)
                .count();
            assert_eq!(twins, 2);
        }
    }

    #[test]
    fn matching_pair_locks_in_and_counts() {
        let mut engine = engine();
        let (a, b) = twin_ids(&engine, Symbol::Heart);

        assert_eq!(engine.select(a).unwrap(), SelectOutcome::Flipped);
        assert_eq!(engine.select(b).unwrap(), SelectOutcome::PairUp);
        assert_eq!(engine.phase(), MatchPhase::Resolving);

        assert_eq!(engine.resolve_pair().unwrap(), ResolveOutcome::Matched);
        assert_eq!(engine.matched_pairs(), 1);
        assert_eq!(engine.move_count(), 1);
        assert!(engine.deck().card(a).unwrap().matched);
        assert!(engine.deck().card(b).unwrap().matched);
    }

    #[test]
    fn mismatched_pair_goes_back_face_down() {
        let mut engine = engine();
        let (a, _) = twin_ids(&engine, Symbol::Heart);
        let (b, _) = twin_ids(&engine, Symbol::Star);

        engine.select(a).unwrap();
        engine.select(b).unwrap();

        assert_eq!(engine.resolve_pair().unwrap(), ResolveOutcome::Mismatched);
        assert_eq!(engine.matched_pairs(), 0);
        assert_eq!(engine.move_count(), 1);
        assert!(!engine.deck().card(a).unwrap().face_up);
        assert!(!engine.deck().card(b).unwrap().face_up);
        assert_eq!(engine.phase(), MatchPhase::Browsing);
    }

    #[test]
    fn selections_are_ignored_while_a_pair_is_resolving() {
        let mut engine = engine();
        let (a, _) = twin_ids(&engine, Symbol::Heart);
        let (b, c) = twin_ids(&engine, Symbol::Star);

        engine.select(a).unwrap();
        engine.select(b).unwrap();

        // rapid clicks while the feedback delay runs
        assert_eq!(engine.select(c).unwrap(), SelectOutcome::NoChange);
        assert_eq!(engine.move_count(), 1);
        assert!(!engine.deck().card(c).unwrap().face_up);
    }

    #[test]
    fn selecting_same_card_twice_is_a_no_op() {
        let mut engine = engine();
        let (a, _) = twin_ids(&engine, Symbol::Heart);

        assert_eq!(engine.select(a).unwrap(), SelectOutcome::Flipped);
        assert_eq!(engine.select(a).unwrap(), SelectOutcome::NoChange);
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn selecting_matched_card_never_changes_counters() {
        let mut engine = engine();
        let (a, b) = twin_ids(&engine, Symbol::Heart);

        engine.select(a).unwrap();
        engine.select(b).unwrap();
        engine.resolve_pair().unwrap();

        assert_eq!(engine.select(a).unwrap(), SelectOutcome::NoChange);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.matched_pairs(), 1);
    }

    #[test]
    fn unknown_card_is_rejected() {
        let mut engine = engine();

        assert_eq!(engine.select(99), Err(CeremonyError::UnknownCard));
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn resolve_without_pending_pair_is_rejected() {
        let mut engine = engine();

        assert_eq!(engine.resolve_pair(), Err(CeremonyError::NothingToResolve));
    }

    #[test]
    fn last_pair_completes_the_game() {
        let mut engine = engine();

        for symbol in Symbol::ALL {
            let (a, b) = twin_ids(&engine, symbol);
            engine.select(a).unwrap();
            engine.select(b).unwrap();
            let outcome = engine.resolve_pair().unwrap();
            if symbol == *Symbol::ALL.last().unwrap() {
                assert_eq!(outcome, ResolveOutcome::Completed);
            } else {
                assert_eq!(outcome, ResolveOutcome::Matched);
            }
        }

        assert_eq!(engine.phase(), MatchPhase::Complete);
        assert_eq!(engine.matched_pairs(), engine.total_pairs());
        assert!(engine.deck().iter().all(|card| card.matched));
        // completion locks the board
        let any = engine.deck().iter().next().unwrap().id;
        assert_eq!(engine.select(any).unwrap(), SelectOutcome::NoChange);
    }

    #[test]
    fn matched_pairs_never_exceed_total() {
        let mut engine = engine();

        for symbol in Symbol::ALL {
            let (a, b) = twin_ids(&engine, symbol);
            engine.select(a).unwrap();
            engine.select(b).unwrap();
            engine.resolve_pair().unwrap();
            assert!(engine.matched_pairs() <= engine.total_pairs());
        }
    }
}
