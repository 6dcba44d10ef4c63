use clap::Args;
use yew::prelude::*;

use crate::gallery::GalleryView;
use crate::home::HomeView;
use crate::messages::MessagesView;
use crate::surprise::SurpriseView;
use crate::theme::Theme;

/// The four pages of the celebration. Plain component state stands in for a
/// router: browser navigation away from the page is outside this machine's
/// concern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    Gallery,
    Messages,
    Surprise,
}

impl Page {
    const NAV: [(Page, &'static str, &'static str); 4] = [
        (Page::Home, "Home", "🏠"),
        (Page::Gallery, "Gallery", "📸"),
        (Page::Messages, "Messages", "💬"),
        (Page::Surprise, "Surprise", "🎁"),
    ];
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Navigate(Page),
    ToggleTheme,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct AppProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub(crate) struct App {
    page: Page,
    theme: Theme,
}

impl App {
    fn nav_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let cb_theme = link.callback(|_| Msg::ToggleTheme);

        html! {
            <nav class="navbar">
                <span class="brand">{"♥ Birthday Wish"}</span>
                <div class="nav-items">
                    {
                        for Page::NAV.iter().map(|&(page, label, icon)| {
                            let class = classes!(
                                "nav-item",
                                (self.page == page).then_some("current"),
                            );
                            let onclick = link.callback(move |_| Msg::Navigate(page));
                            html! {
                                <button {class} {onclick}>
                                    <span class="nav-icon">{icon}</span>
                                    {label}
                                </button>
                            }
                        })
                    }
                </div>
                <button class="theme-toggle" onclick={cb_theme}>
                    { match self.theme { Theme::Light => "🌙", Theme::Dark => "☀️" } }
                </button>
            </nav>
        }
    }

    fn footer_view(&self) -> Html {
        html! {
            <footer class="footer">
                <p>{"♥ Made with love ♥"}</p>
                <p class="fine">{"A birthday celebration created just for you."}</p>
            </footer>
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Home,
            theme: Theme::current(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page != page {
                    log::debug!("navigate: {:?}", page);
                    self.page = page;
                    true
                } else {
                    false
                }
            }
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                Theme::apply(Some(self.theme));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let seed = ctx.props().seed;
        let on_navigate = ctx.link().callback(Msg::Navigate);

        html! {
            <div class="festiva">
                { self.nav_view(ctx) }
                <main>
                    {
                        match self.page {
                            Page::Home => html! { <HomeView {on_navigate} {seed}/> },
                            Page::Gallery => html! { <GalleryView/> },
                            Page::Messages => html! { <MessagesView/> },
                            Page::Surprise => html! { <SurpriseView {seed}/> },
                        }
                    }
                </main>
                { self.footer_view() }
            </div>
        }
    }
}
