use yew::prelude::*;

use crate::app::Page;
use crate::confetti::{ParticleLayer, ParticleMotion};
use crate::content;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct HomeProps {
    pub on_navigate: Callback<Page>,
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// The landing page: hero copy, feature cards, and a confetti layer.
#[function_component(HomeView)]
pub(crate) fn home_view(props: &HomeProps) -> Html {
    let goto = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };

    html! {
        <section class="home">
            <ParticleLayer motion={ParticleMotion::Falling} seed={props.seed}/>
            <div class="hero">
                <h1>
                    {content::HERO_TITLE}
                    <span class="hero-name">{content::HERO_NAME}</span>
                </h1>
                <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>
                <div class="hero-actions">
                    <button class="cta" onclick={goto(Page::Gallery)}>
                        {"Explore memories →"}
                    </button>
                    <button class="ghost" onclick={goto(Page::Messages)}>
                        {"Read wishes"}
                    </button>
                </div>
            </div>
            <div class="feature-grid">
                {
                    for content::FEATURES.iter().map(|feature| html! {
                        <div class="feature">
                            <div class="icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.blurb}</p>
                        </div>
                    })
                }
            </div>
            <div class="panel ready">
                <h3>{"Ready to begin?"}</h3>
                <p>{"Your birthday journey awaits."}</p>
                <button class="cta" onclick={goto(Page::Surprise)}>
                    {"Start celebrating"}
                </button>
            </div>
        </section>
    }
}
