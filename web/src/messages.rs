use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::content;

/// Milliseconds per typewriter character.
const TYPE_TICK_MS: u32 = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RevealAnimation {
    Typewriter,
    Flip,
    Fade,
}

impl RevealAnimation {
    const ALL: [(RevealAnimation, &'static str); 3] = [
        (RevealAnimation::Typewriter, "Type"),
        (RevealAnimation::Flip, "Flip"),
        (RevealAnimation::Fade, "Fade"),
    ];
}

/// Character counter behind the typewriter reveal. Pure so the cadence can
/// live in the component while the arithmetic stays testable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct TypewriterState {
    total: usize,
    shown: usize,
}

impl TypewriterState {
    pub(crate) const fn new(total: usize) -> Self {
        Self { total, shown: 0 }
    }

    pub(crate) const fn shown(&self) -> usize {
        self.shown
    }

    pub(crate) const fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Advances by one character; returns whether anything changed.
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_done() {
            false
        } else {
            self.shown += 1;
            true
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct MessageCardProps {
    index: usize,
    animation: RevealAnimation,
}

enum CardMsg {
    TypeTick,
    ToggleFlip,
}

struct MessageCard {
    typewriter: TypewriterState,
    flipped: bool,
    _typer: Option<Interval>,
}

impl MessageCard {
    fn entry(ctx: &Context<Self>) -> &'static content::MessageEntry {
        &content::MESSAGES[ctx.props().index]
    }

    fn create_typer(ctx: &Context<Self>) -> Option<Interval> {
        (ctx.props().animation == RevealAnimation::Typewriter).then(|| {
            let link = ctx.link().clone();
            Interval::new(TYPE_TICK_MS, move || link.send_message(CardMsg::TypeTick))
        })
    }

    fn author_view(entry: &content::MessageEntry) -> Html {
        html! {
            <footer class="author">
                <span class="avatar">{"👤"}</span>
                <div>
                    <p class="name">{entry.author}</p>
                    <p class="date">{entry.date}</p>
                </div>
            </footer>
        }
    }
}

impl Component for MessageCard {
    type Message = CardMsg;
    type Properties = MessageCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            typewriter: TypewriterState::new(Self::entry(ctx).body.chars().count()),
            flipped: false,
            _typer: Self::create_typer(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CardMsg::TypeTick => {
                let updated = self.typewriter.advance();
                if self.typewriter.is_done() {
                    self._typer = None;
                }
                updated
            }
            CardMsg::ToggleFlip => {
                self.flipped = !self.flipped;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().animation != old_props.animation {
            self.typewriter = TypewriterState::new(Self::entry(ctx).body.chars().count());
            self.flipped = false;
            self._typer = Self::create_typer(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let entry = Self::entry(ctx);
        let special = entry.special.then_some("special");

        match ctx.props().animation {
            RevealAnimation::Typewriter => {
                let shown: String = entry.body.chars().take(self.typewriter.shown()).collect();
                html! {
                    <article class={classes!("message-card", special)}>
                        <p class="body">
                            {shown}
                            { if self.typewriter.is_done() { Html::default() } else {
                                html! { <span class="caret">{"|"}</span> }
                            }}
                        </p>
                        { Self::author_view(entry) }
                    </article>
                }
            }
            RevealAnimation::Flip => {
                let onclick = ctx.link().callback(|_| CardMsg::ToggleFlip);
                let class = classes!(
                    "message-card",
                    "flip",
                    special,
                    self.flipped.then_some("flipped"),
                );
                html! {
                    <article {class} {onclick}>
                        <div class="front">
                            <span class="avatar">{"👤"}</span>
                            <h3>{entry.author}</h3>
                            <p class="hint">{"Click to read message"}</p>
                        </div>
                        <div class="back">
                            <p class="body">{entry.body}</p>
                            <p class="signature">{format!("— {}", entry.author)}</p>
                        </div>
                    </article>
                }
            }
            RevealAnimation::Fade => {
                let style = format!("animation-delay:{}ms;", ctx.props().index * 150);
                html! {
                    <article class={classes!("message-card", "fade", special)} {style}>
                        <p class="body">{entry.body}</p>
                        { Self::author_view(entry) }
                    </article>
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SetAnimation(RevealAnimation),
}

/// The message-wall page: every hard-coded wish, revealed with the animation
/// the visitor picks.
pub(crate) struct MessagesView {
    animation: RevealAnimation,
}

impl Component for MessagesView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            animation: RevealAnimation::Typewriter,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetAnimation(animation) => {
                if self.animation != animation {
                    log::debug!("message animation: {:?}", animation);
                    self.animation = animation;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <section class="messages">
                <header class="page-header">
                    <h1>{"Birthday Wishes"}</h1>
                    <p>{"Heartfelt messages from the people who love you."}</p>
                    <div class="view-toggle">
                        {
                            for RevealAnimation::ALL.iter().map(|&(animation, label)| {
                                let class = classes!(
                                    "toggle",
                                    (self.animation == animation).then_some("selected"),
                                );
                                let onclick = link.callback(move |_| Msg::SetAnimation(animation));
                                html! { <button {class} {onclick}>{label}</button> }
                            })
                        }
                    </div>
                </header>
                <div class="message-wall">
                    {
                        for (0..content::MESSAGES.len()).map(|index| html! {
                            <MessageCard key={index} {index} animation={self.animation}/>
                        })
                    }
                </div>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_advances_once_per_tick_until_done() {
        let mut state = TypewriterState::new(3);

        assert!(state.advance());
        assert!(state.advance());
        assert!(!state.is_done());
        assert!(state.advance());
        assert!(state.is_done());
        assert_eq!(state.shown(), 3);
    }

    #[test]
    fn typewriter_is_idempotent_after_completion() {
        let mut state = TypewriterState::new(1);
        state.advance();

        assert!(!state.advance());
        assert_eq!(state.shown(), 1);
    }

    #[test]
    fn empty_message_is_done_immediately() {
        let state = TypewriterState::new(0);

        assert!(state.is_done());
    }

    #[test]
    fn every_message_has_an_author_and_a_body() {
        for entry in content::MESSAGES {
            assert!(!entry.author.is_empty());
            assert!(!entry.body.is_empty());
        }
    }
}
