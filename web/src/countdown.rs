use festiva_core as ceremony;
use gloo::timers::callback::Interval;
use yew::prelude::*;

fn format_two_digits(value: u32) -> String {
    format!("{:02}", value)
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CountdownProps {
    pub initial_secs: u32,
    /// Fired when the user takes the reveal action; only offered once the
    /// countdown has finished.
    pub on_reveal: Callback<()>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Tick,
    Reveal,
}

/// The countdown panel: a one-second interval drives the core countdown, and
/// the reveal control only appears in the terminal phase.
pub(crate) struct CountdownView {
    countdown: ceremony::Countdown,
    _ticker: Option<Interval>,
}

impl CountdownView {
    fn create_ticker(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(1000, move || link.send_message(Msg::Tick))
    }

    fn unit_view(label: &str, value: u32) -> Html {
        html! {
            <div class="countdown-unit">
                <div class="countdown-value">{format_two_digits(value)}</div>
                <div class="countdown-label">{label}</div>
            </div>
        }
    }
}

impl Component for CountdownView {
    type Message = Msg;
    type Properties = CountdownProps;

    fn create(ctx: &Context<Self>) -> Self {
        let countdown = ceremony::Countdown::new(ctx.props().initial_secs);
        Self {
            _ticker: (!countdown.is_finished()).then(|| Self::create_ticker(ctx)),
            countdown,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use ceremony::TickOutcome::*;

        match msg {
            Msg::Tick => match self.countdown.tick() {
                Ticked => true,
                Finished => {
                    log::debug!("countdown finished");
                    // the countdown stops itself; further ticks are not scheduled
                    self._ticker = None;
                    true
                }
                NoChange => false,
            },
            Msg::Reveal => {
                if self.countdown.is_finished() {
                    ctx.props().on_reveal.emit(());
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (hours, minutes, seconds) = self.countdown.split_hms();
        let cb_reveal = ctx.link().callback(|_| Msg::Reveal);

        html! {
            <div class="panel countdown">
                <h2>{"Special Surprise"}</h2>
                {
                    if self.countdown.is_finished() {
                        html! {
                            <>
                                <div class="countdown-done">{"🎁"}</div>
                                <h3>{"Time's up!"}</h3>
                                <p>{"Your special surprise is ready to be revealed!"}</p>
                                <button class="cta" onclick={cb_reveal}>
                                    {"Reveal my surprise"}
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <>
                                <p>{"Something special is waiting for you..."}</p>
                                <div class="countdown-units">
                                    { Self::unit_view("Hours", hours) }
                                    { Self::unit_view("Minutes", minutes) }
                                    { Self::unit_view("Seconds", seconds) }
                                </div>
                            </>
                        }
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_digit_formatting_pads_single_digits() {
        assert_eq!(format_two_digits(0), "00");
        assert_eq!(format_two_digits(7), "07");
        assert_eq!(format_two_digits(59), "59");
    }
}
