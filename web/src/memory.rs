use chrono::prelude::*;
use festiva_core as ceremony;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::confetti::symbol_glyph;
use crate::utils::js_random_seed;

/// Visual-feedback pause before a face-up pair is settled.
const RESOLVE_DELAY_MS: u32 = 1000;
/// Pause between the last match and handing control back to the sequencer.
const COMPLETE_DELAY_MS: u32 = 1000;

fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap()
}

/// A dealt game plus its wall-clock bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pub engine: ceremony::MatchEngine,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    fn deal(seed: u64) -> Self {
        use ceremony::{DeckGenerator, ShuffledDeckGenerator};

        let deck = ShuffledDeckGenerator::new(seed)
            .generate(&ceremony::Symbol::ALL)
            .expect("symbol set is non-empty");
        Self {
            engine: ceremony::MatchEngine::new(deck),
            started_at: None,
            ended_at: None,
        }
    }

    fn on_successful_move(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        if self.engine.is_complete() && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MemoryProps {
    #[prop_or_default]
    pub seed: Option<u64>,
    /// Fired shortly after the last pair locks in.
    pub on_complete: Callback<()>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Select(ceremony::CardId),
    ResolvePair,
    Finished,
    Replay,
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    card: ceremony::Card,
    #[prop_or_default]
    locked: bool,
    callback: Callback<ceremony::CardId>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        card,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "card",
        card.is_revealed().then_some("revealed"),
        card.matched.then_some("matched"),
        locked.then_some("locked"),
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        callback.emit(card.id);
        log::trace!("card {} clicked", card.id);
    });

    html! {
        <button {class} {onclick}>
            <span class="card-back">{"●"}</span>
            <span class="card-face">{symbol_glyph(card.symbol)}</span>
        </button>
    }
}

/// The memory-match panel. The engine is pure; the two deferred steps (pair
/// resolution, completion hand-off) live here as cancellable timeouts so a
/// replay can never act on a stale deck.
pub(crate) struct MemoryView {
    session: GameSession,
    resolve_delay: Option<Timeout>,
    complete_delay: Option<Timeout>,
}

impl MemoryView {
    fn cancel_pending(&mut self) {
        // dropping a Timeout cancels the scheduled callback
        self.resolve_delay = None;
        self.complete_delay = None;
    }
}

impl Component for MemoryView {
    type Message = Msg;
    type Properties = MemoryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        Self {
            session: GameSession::deal(seed),
            resolve_delay: None,
            complete_delay: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use ceremony::{ResolveOutcome, SelectOutcome};

        match msg {
            Msg::Select(id) => match self.session.engine.select(id) {
                Ok(SelectOutcome::NoChange) => false,
                Ok(SelectOutcome::Flipped) => {
                    self.session.on_successful_move(utc_now());
                    true
                }
                Ok(SelectOutcome::PairUp) => {
                    self.session.on_successful_move(utc_now());
                    let link = ctx.link().clone();
                    self.resolve_delay = Some(Timeout::new(RESOLVE_DELAY_MS, move || {
                        link.send_message(Msg::ResolvePair)
                    }));
                    true
                }
                Err(err) => {
                    log::debug!("select ignored: {}", err);
                    false
                }
            },
            Msg::ResolvePair => {
                self.resolve_delay = None;
                match self.session.engine.resolve_pair() {
                    Ok(outcome) => {
                        self.session.on_successful_move(utc_now());
                        if outcome == ResolveOutcome::Completed {
                            let link = ctx.link().clone();
                            self.complete_delay = Some(Timeout::new(COMPLETE_DELAY_MS, move || {
                                link.send_message(Msg::Finished)
                            }));
                        }
                        true
                    }
                    Err(err) => {
                        // a replay raced the feedback delay; nothing to settle
                        log::debug!("stale resolution ignored: {}", err);
                        false
                    }
                }
            }
            Msg::Finished => {
                self.complete_delay = None;
                ctx.props().on_complete.emit(());
                false
            }
            Msg::Replay => {
                self.cancel_pending();
                self.session = GameSession::deal(js_random_seed());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let engine = &self.session.engine;
        let complete = engine.is_complete();
        let locked = !engine.phase().accepts_selection();
        let callback = ctx.link().callback(Msg::Select);
        let cb_replay = ctx.link().callback(|_| Msg::Replay);

        html! {
            <div class="panel memory-game">
                <h2>{"Memory Game"}</h2>
                <p>{"Match the pairs to unlock your surprise!"}</p>
                <div class="scoreboard">
                    <span>{format!("Moves: {}", engine.move_count())}</span>
                    <span>{format!("Pairs: {}/{}", engine.matched_pairs(), engine.total_pairs())}</span>
                </div>
                <div class="card-grid">
                    {
                        for engine.deck().iter().map(|&card| html! {
                            <CardView key={card.id} {card} locked={locked} callback={callback.clone()}/>
                        })
                    }
                </div>
                {
                    if complete {
                        html! {
                            <div class="game-complete">
                                <div class="burst">{"🎉"}</div>
                                <h3>{"Congratulations!"}</h3>
                                <p>{format!(
                                    "You completed the game in {} moves and {} seconds!",
                                    engine.move_count(),
                                    self.session.elapsed_secs(utc_now()),
                                )}</p>
                            </div>
                        }
                    } else {
                        Html::default()
                    }
                }
                <button class="ghost" onclick={cb_replay}>{"Play again"}</button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(0).unwrap()
    }

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(secs * 1000).unwrap()
    }

    fn twin_ids(session: &GameSession, symbol: ceremony::Symbol) -> (ceremony::CardId, ceremony::CardId) {
        let ids: Vec<ceremony::CardId> = session
            .engine
            .deck()
            .iter()
            .filter(|card| card.symbol == symbol)
            .map(|card| card.id)
            .collect();
        (ids[0], ids[1])
    }

    #[test]
    fn session_stamps_start_on_first_move_only() {
        let mut session = GameSession::deal(7);

        let first = session.engine.deck().iter().next().unwrap().id;
        session.engine.select(first).unwrap();
        session.on_successful_move(t0());
        session.on_successful_move(t(5));

        assert_eq!(session.started_at, Some(t0()));
        assert_eq!(session.ended_at, None);
    }

    #[test]
    fn session_stamps_end_when_the_board_completes() {
        let mut session = GameSession::deal(7);

        for symbol in ceremony::Symbol::ALL {
            let (a, b) = twin_ids(&session, symbol);
            session.engine.select(a).unwrap();
            session.on_successful_move(t0());
            session.engine.select(b).unwrap();
            session.on_successful_move(t0());
            session.engine.resolve_pair().unwrap();
            session.on_successful_move(t(30));
        }

        assert_eq!(session.ended_at, Some(t(30)));
        assert_eq!(session.elapsed_secs(t(99)), 30);
    }

    #[test]
    fn elapsed_is_zero_before_the_first_move() {
        let session = GameSession::deal(7);

        assert_eq!(session.elapsed_secs(t(42)), 0);
    }

    #[test]
    fn same_seed_deals_identical_sessions() {
        let a = GameSession::deal(1234);
        let b = GameSession::deal(1234);

        assert_eq!(a.engine.deck(), b.engine.deck());
    }
}
