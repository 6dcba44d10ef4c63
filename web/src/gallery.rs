use std::collections::HashSet;

use yew::prelude::*;

use crate::content::{self, Photo};
use crate::utils::Modal;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ViewMode {
    Grid,
    List,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SetMode(ViewMode),
    Open(usize),
    Close,
    ToggleLike(usize),
}

#[derive(Properties, Clone, PartialEq)]
struct PhotoCardProps {
    index: usize,
    #[prop_or_default]
    liked: bool,
    on_open: Callback<usize>,
    on_like: Callback<usize>,
}

#[function_component(PhotoCard)]
fn photo_card(props: &PhotoCardProps) -> Html {
    let PhotoCardProps {
        index,
        liked,
        on_open,
        on_like,
    } = props.clone();
    let photo = &content::PHOTOS[index];

    let onclick = Callback::from(move |_: MouseEvent| on_open.emit(index));
    let on_like = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        on_like.emit(index);
    });

    html! {
        <figure class="photo-card" {onclick}>
            <img src={photo.src} alt={photo.alt} loading="lazy"/>
            <figcaption>
                <h3>{photo.title}</h3>
                <p>{photo.date}</p>
                <button
                    class={classes!("like", liked.then_some("liked"))}
                    onclick={on_like}
                >
                    {if liked { "♥" } else { "♡" }}
                </button>
            </figcaption>
        </figure>
    }
}

/// The memory-gallery page: the hard-coded photo collection in a grid or
/// list, with a full-size lightbox portalled onto the body.
pub(crate) struct GalleryView {
    mode: ViewMode,
    lightbox: Option<usize>,
    liked: HashSet<usize>,
}

impl GalleryView {
    fn lightbox_view(&self, ctx: &Context<Self>, photo: &Photo) -> Html {
        let cb_close = ctx.link().callback(|_| Msg::Close);
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <Modal>
                <div class="lightbox" onclick={cb_close.clone()}>
                    <figure onclick={stop}>
                        <img src={photo.src} alt={photo.alt}/>
                        <figcaption>{photo.title}</figcaption>
                        <button class="close" onclick={cb_close}>{"×"}</button>
                    </figure>
                </div>
            </Modal>
        }
    }
}

impl Component for GalleryView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            mode: ViewMode::Grid,
            lightbox: None,
            liked: HashSet::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetMode(mode) => {
                if self.mode != mode {
                    self.mode = mode;
                    true
                } else {
                    false
                }
            }
            Msg::Open(index) => {
                log::debug!("lightbox open: {}", index);
                self.lightbox = Some(index);
                true
            }
            Msg::Close => self.lightbox.take().is_some(),
            Msg::ToggleLike(index) => {
                if !self.liked.insert(index) {
                    self.liked.remove(&index);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_open = link.callback(Msg::Open);
        let on_like = link.callback(Msg::ToggleLike);

        let mode_button = |mode: ViewMode, label: &str| {
            let class = classes!("toggle", (self.mode == mode).then_some("selected"));
            let onclick = link.callback(move |_| Msg::SetMode(mode));
            html! { <button {class} {onclick}>{label}</button> }
        };

        html! {
            <section class="gallery">
                <header class="page-header">
                    <h1>{"Memory Gallery"}</h1>
                    <p>{"A collection of our precious moments together. Each photo tells a \
                        story of joy, laughter, and love."}</p>
                    <div class="view-toggle">
                        { mode_button(ViewMode::Grid, "Grid") }
                        { mode_button(ViewMode::List, "List") }
                    </div>
                </header>
                <div class={classes!("photo-collection", match self.mode {
                    ViewMode::Grid => "grid",
                    ViewMode::List => "list",
                })}>
                    {
                        for (0..content::PHOTOS.len()).map(|index| html! {
                            <PhotoCard
                                key={index}
                                {index}
                                liked={self.liked.contains(&index)}
                                on_open={on_open.clone()}
                                on_like={on_like.clone()}
                            />
                        })
                    }
                </div>
                {
                    match self.lightbox {
                        Some(index) => self.lightbox_view(ctx, &content::PHOTOS[index]),
                        None => Html::default(),
                    }
                }
            </section>
        }
    }
}
