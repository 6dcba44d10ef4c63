use festiva_core as ceremony;
use yew::prelude::*;

use crate::confetti::{ParticleLayer, ParticleMotion};
use crate::content;
use crate::countdown::CountdownView;
use crate::memory::MemoryView;
use crate::utils::Modal;

/// Length of the demo countdown, matching the original reveal pacing.
const COUNTDOWN_SECS: u32 = 10;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct SurpriseProps {
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Advance(ceremony::StageEvent),
    ShowLetter,
    HideLetter,
}

/// The scripted surprise flow. Holds the current [`ceremony::Stage`] and lets
/// the sequencer reject anything off the scripted path; children only report
/// their own completion.
pub(crate) struct SurpriseView {
    stage: ceremony::Stage,
    letter_open: bool,
    letter_read: bool,
}

impl SurpriseView {
    fn welcome_view(&self, ctx: &Context<Self>) -> Html {
        let cb_begin = ctx
            .link()
            .callback(|_| Msg::Advance(ceremony::StageEvent::Begin));

        html! {
            <div class="panel welcome">
                <div class="badge">{"✨"}</div>
                <h2>{"Welcome to Your Birthday Adventure!"}</h2>
                <p>{"A series of magical moments, interactive challenges, and heartfelt \
                    revelations awaits. Ready?"}</p>
                <div class="teaser-grid">
                    {
                        for content::SURPRISE_TEASERS.iter().map(|teaser| html! {
                            <div class="teaser">
                                <div class="icon">{teaser.icon}</div>
                                <h3>{teaser.title}</h3>
                                <p>{teaser.blurb}</p>
                            </div>
                        })
                    }
                </div>
                <button class="cta" onclick={cb_begin}>{"Begin the adventure"}</button>
            </div>
        }
    }

    fn letter_view(&self, ctx: &Context<Self>) -> Html {
        let cb_read = ctx.link().callback(|_| Msg::ShowLetter);
        let cb_continue = ctx
            .link()
            .callback(|_| Msg::Advance(ceremony::StageEvent::OpenLetter));

        html! {
            <div class="panel letter">
                <div class="badge">{"💌"}</div>
                <h2>{"You've unlocked something special!"}</h2>
                <p>{"A little letter has been written for you, filled with love, \
                    memories, and birthday wishes."}</p>
                <button class="cta" onclick={cb_read}>{"Read your letter"}</button>
                {
                    // the continue edge only opens up once the letter was seen
                    if self.letter_read {
                        html! {
                            <button class="ghost" onclick={cb_continue}>
                                {"Continue to the final surprise"}
                            </button>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>
        }
    }

    fn final_view(&self, ctx: &Context<Self>) -> Html {
        let cb_restart = ctx
            .link()
            .callback(|_| Msg::Advance(ceremony::StageEvent::Restart));

        html! {
            <div class="panel finale">
                <div class="badge">{"🎉"}</div>
                <h2>{"Happy Birthday, Beautiful Soul!"}</h2>
                <p>{"You've completed your birthday adventure! Every animation, every \
                    word, every moment of this site was made to celebrate you."}</p>
                <p>{"May this new year bring you endless joy, beautiful adventures, and \
                    all the love your heart can hold. ✨"}</p>
                <button class="ghost" onclick={cb_restart}>{"Restart adventure"}</button>
            </div>
        }
    }

    fn letter_modal(&self, ctx: &Context<Self>) -> Html {
        let cb_close = ctx.link().callback(|_| Msg::HideLetter);
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <Modal>
                <div class="lightbox letter-modal" onclick={cb_close.clone()}>
                    <article onclick={stop}>
                        <h3>{"A Letter Just For You"}</h3>
                        <div class="letter-body">{content::LETTER}</div>
                        <button class="cta" onclick={cb_close}>{"Close letter"}</button>
                    </article>
                </div>
            </Modal>
        }
    }
}

impl Component for SurpriseView {
    type Message = Msg;
    type Properties = SurpriseProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            stage: ceremony::Stage::default(),
            letter_open: false,
            letter_read: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Advance(event) => match self.stage.apply(event) {
                Ok(next) => {
                    log::debug!("stage {:?} --{:?}--> {:?}", self.stage, event, next);
                    if next.is_initial() {
                        // restart forgets the letter state along with the rest
                        self.letter_open = false;
                        self.letter_read = false;
                    }
                    self.stage = next;
                    true
                }
                Err(err) => {
                    log::debug!("ignored {:?} at {:?}: {}", event, self.stage, err);
                    false
                }
            },
            Msg::ShowLetter => {
                self.letter_open = true;
                self.letter_read = true;
                true
            }
            Msg::HideLetter => {
                self.letter_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use ceremony::Stage::*;

        let link = ctx.link();
        let seed = ctx.props().seed;
        let cb_countdown_done = link.callback(|_| {
            Msg::Advance(ceremony::StageEvent::CountdownFinished)
        });
        let cb_game_done = link.callback(|_| Msg::Advance(ceremony::StageEvent::GameCompleted));

        html! {
            <section class="surprise">
                <ParticleLayer
                    motion={ParticleMotion::Rising}
                    active={!self.stage.is_initial()}
                    {seed}
                />
                <header class="page-header">
                    <h1>{"Special Surprise"}</h1>
                    <p>{"Something magical is waiting just for you."}</p>
                </header>
                {
                    match self.stage {
                        Welcome => self.welcome_view(ctx),
                        Countdown => html! {
                            <CountdownView
                                initial_secs={COUNTDOWN_SECS}
                                on_reveal={cb_countdown_done}
                            />
                        },
                        Game => html! {
                            <MemoryView {seed} on_complete={cb_game_done}/>
                        },
                        Letter => self.letter_view(ctx),
                        Final => self.final_view(ctx),
                    }
                }
                { if self.letter_open { self.letter_modal(ctx) } else { Html::default() } }
            </section>
        }
    }
}
