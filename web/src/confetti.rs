use festiva_core as ceremony;
use gloo::timers::callback::Interval;
use rand::prelude::*;
use yew::prelude::*;

use crate::utils::js_random_seed;

/// One animation tick per callback; the core field is driven in these units.
const TICK_MS: u32 = 100;
/// A fresh batch every this many ticks.
const SPAWN_EVERY: ceremony::Tick = 8;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ParticleMotion {
    /// Confetti drifting down across the page.
    Falling,
    /// Celebration icons floating up from the bottom edge.
    Rising,
}

impl ParticleMotion {
    const fn layer_class(self) -> &'static str {
        match self {
            Self::Falling => "falling",
            Self::Rising => "rising",
        }
    }

    fn field_config(self) -> ceremony::ParticleFieldConfig {
        match self {
            Self::Falling => ceremony::ParticleFieldConfig::confetti(),
            Self::Rising => ceremony::ParticleFieldConfig::floating(),
        }
    }
}

pub(crate) const fn symbol_glyph(symbol: ceremony::Symbol) -> &'static str {
    use ceremony::Symbol::*;
    match symbol {
        Heart => "♥",
        Star => "★",
        Gift => "🎁",
        Sparkle => "✦",
    }
}

const fn color_class(color: ceremony::ColorTag) -> &'static str {
    use ceremony::ColorTag::*;
    match color {
        Primary => "tint-primary",
        Accent => "tint-accent",
        Secondary => "tint-secondary",
        Pink => "tint-pink",
        Purple => "tint-purple",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ParticleLayerProps {
    pub motion: ParticleMotion,
    #[prop_or(true)]
    pub active: bool,
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Tick,
}

/// Decorative particle layer. All randomness comes from the seeded rng so a
/// forced seed replays the exact same confetti.
pub(crate) struct ParticleLayer {
    field: ceremony::ParticleField,
    rng: SmallRng,
    now: ceremony::Tick,
    _ticker: Option<Interval>,
}

impl ParticleLayer {
    fn create_ticker(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(TICK_MS, move || link.send_message(Msg::Tick))
    }

    fn particle_view(&self, particle: &ceremony::Particle) -> Html {
        let class = classes!(
            "particle",
            color_class(particle.color),
            match particle.symbol {
                ceremony::Symbol::Heart => "glyph-heart",
                ceremony::Symbol::Star => "glyph-star",
                ceremony::Symbol::Gift => "glyph-gift",
                ceremony::Symbol::Sparkle => "glyph-sparkle",
            }
        );
        let style = format!(
            "left:{:.1}vw;--drift:{:.1}vw;--spin:{:.0}deg;--size:{:.2};animation-duration:{}ms;",
            particle.x,
            particle.drift,
            particle.rotation,
            particle.scale,
            particle.lifetime * TICK_MS,
        );

        html! {
            <span key={particle.id} {class} {style}>{symbol_glyph(particle.symbol)}</span>
        }
    }
}

impl Component for ParticleLayer {
    type Message = Msg;
    type Properties = ParticleLayerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        Self {
            field: ceremony::ParticleField::new(props.motion.field_config()),
            rng: SmallRng::seed_from_u64(seed),
            now: 0,
            _ticker: props.active.then(|| Self::create_ticker(ctx)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => {
                self.now = self.now.wrapping_add(1);
                let mut updated = self.field.prune(self.now) > 0;
                if self.now % SPAWN_EVERY == 0 {
                    self.field.spawn_batch(&mut self.rng, self.now);
                    updated = true;
                }
                updated
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let active = ctx.props().active;
        if active == old_props.active {
            return true;
        }

        if active {
            self._ticker = Some(Self::create_ticker(ctx));
        } else {
            // dropping the handle cancels the callback; no stale ticks
            self._ticker = None;
            self.field.clear();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().active && self.field.is_empty() {
            return Html::default();
        }

        let layer_class = classes!("particle-layer", ctx.props().motion.layer_class());
        html! {
            <div class={layer_class} aria-hidden="true">
                { for self.field.iter().map(|particle| self.particle_view(particle)) }
            </div>
        }
    }
}
