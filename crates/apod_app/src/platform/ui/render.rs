//! Dioxus components that draw the core view model.
//!
//! Components hold no state of their own; every interaction becomes a
//! [`Msg`] sent through `on_msg`.

use apod_core::{
    AppViewModel, CardMedia, CardView, DetailMedia, DetailView, EmbedFrame, GalleryView,
    ImageView, Key as GalleryKey, Msg,
};
use dioxus::prelude::*;

use super::constants::*;

fn gallery_key(key: &Key) -> GalleryKey {
    GalleryKey::from_dom_key(&key.to_string())
}

#[component]
pub fn Page(view: AppViewModel, on_msg: EventHandler<Msg>) -> Element {
    rsx! {
        div {
            class: "container",
            header { class: "site-header",
                h1 { "{PAGE_TITLE}" }
                button {
                    id: BUTTON_FETCH_ID,
                    class: "fetch-button",
                    onclick: move |_| on_msg.call(Msg::FetchClicked),
                    "{FETCH_BUTTON_LABEL}"
                }
            }
            if let Some(fact) = view.fact {
                FactBanner { fact }
            }
            Gallery { gallery: view.gallery.clone(), loading: view.loading, on_msg }
            Modal { detail: view.detail.clone(), on_msg }
        }
    }
}

#[component]
fn FactBanner(fact: &'static str) -> Element {
    rsx! {
        section { id: FACT_ID, class: "random-fact",
            p {
                "🔭 "
                strong { "Did you know?" }
                " {fact}"
            }
        }
    }
}

#[component]
fn Gallery(gallery: GalleryView, loading: bool, on_msg: EventHandler<Msg>) -> Element {
    rsx! {
        section {
            id: GALLERY_ID,
            class: "gallery",
            "aria-busy": if loading { "true" } else { "false" },
            "aria-live": "polite",
            {match gallery {
                GalleryView::Message(text) => rsx! {
                    div { class: "placeholder", p { "{text}" } }
                },
                GalleryView::Cards(cards) => rsx! {
                    div { class: "cards",
                        for card in cards {
                            Card { key: "{card.index}", card: card.clone(), on_msg }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn Card(card: CardView, on_msg: EventHandler<Msg>) -> Element {
    let index = card.index;
    rsx! {
        article {
            class: "card",
            "data-index": "{index}",
            role: "button",
            tabindex: "0",
            "aria-pressed": if card.pressed { "true" } else { "false" },
            onclick: move |_| on_msg.call(Msg::CardActivated { index }),
            onkeydown: move |evt: KeyboardEvent| {
                let key = gallery_key(&evt.key());
                if key.activates_card() {
                    evt.prevent_default();
                }
                on_msg.call(Msg::CardKeyPressed { index, key });
            },
            div { class: "media",
                CardMediaView { media: card.media.clone() }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{card.title}" }
                small { class: "card-date", "{card.date}" }
            }
        }
    }
}

#[component]
fn Thumbnail(image: ImageView) -> Element {
    rsx! {
        img { src: "{image.src}", alt: "{image.alt}", "loading": "lazy" }
    }
}

#[component]
fn CardMediaView(media: CardMedia) -> Element {
    match media {
        CardMedia::Image(image) => rsx! {
            Thumbnail { image }
        },
        CardMedia::VideoThumbnail(image) => rsx! {
            div { class: "video-thumb-wrap",
                Thumbnail { image }
                div { class: "play-overlay", "aria-hidden": "true", "{PLAY_GLYPH}" }
            }
        },
        CardMedia::VideoPlaceholder => rsx! {
            div { class: "no-media",
                div { class: "play-overlay small", "aria-hidden": "true", "{PLAY_GLYPH}" }
                div { class: "no-media-text", "{VIDEO_PLACEHOLDER_TEXT}" }
            }
        },
        CardMedia::Unavailable => rsx! {
            div { class: "no-media", "{MEDIA_UNAVAILABLE_TEXT}" }
        },
    }
}

#[component]
fn Modal(detail: Option<DetailView>, on_msg: EventHandler<Msg>) -> Element {
    let open = detail.is_some();
    rsx! {
        div {
            id: MODAL_ID,
            class: if open { "modal open" } else { "modal" },
            "aria-hidden": if open { "false" } else { "true" },
            div {
                class: "modal-backdrop",
                onclick: move |_| on_msg.call(Msg::BackdropClicked),
            }
            if let Some(detail) = detail {
                div {
                    class: "modal-dialog",
                    role: "dialog",
                    "aria-modal": "true",
                    tabindex: "-1",
                    onmounted: move |evt: MountedEvent| async move {
                        let data = evt.data();
                        let _ = data.set_focus(true).await;
                    },
                    button {
                        class: "modal-close",
                        "aria-label": CLOSE_LABEL,
                        onclick: move |_| on_msg.call(Msg::CloseClicked),
                        "×"
                    }
                    div { class: "modal-media",
                        DetailMediaView { media: detail.media.clone() }
                    }
                    h2 { class: "modal-title", "{detail.title}" }
                    p { class: "modal-date", "{detail.date}" }
                    p { class: "modal-explanation", "{detail.explanation}" }
                }
            }
        }
    }
}

#[component]
fn DetailMediaView(media: DetailMedia) -> Element {
    match media {
        DetailMedia::Image(image) => rsx! {
            Thumbnail { image }
        },
        DetailMedia::Embed(frame) => rsx! {
            div { class: "video-embed-wrap",
                EmbedFrameView { frame }
            }
        },
        DetailMedia::ExternalFrame { frame, link } => rsx! {
            EmbedFrameView { frame }
            a {
                class: "embed-fallback",
                href: "{link}",
                target: "_blank",
                rel: "noopener",
                "{OPEN_EMBED_SOURCE_LABEL}"
            }
        },
        DetailMedia::Fallback { thumbnail, link } => rsx! {
            if let Some(image) = thumbnail {
                Thumbnail { image }
            }
            if let Some(link) = link {
                a {
                    class: "video-link",
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener",
                    "{OPEN_VIDEO_LABEL}"
                }
            }
        },
        DetailMedia::Message(text) => rsx! {
            p { class: "media-message", "{text}" }
        },
    }
}

#[component]
fn EmbedFrameView(frame: EmbedFrame) -> Element {
    rsx! {
        iframe {
            src: "{frame.src}",
            title: "{frame.title}",
            width: "{frame.width}",
            height: "{frame.height}",
            "frameborder": "0",
            "allow": "{frame.allow}",
            "allowfullscreen": frame.allow_fullscreen.then_some(""),
            "referrerpolicy": frame.referrer_policy.clone(),
        }
    }
}
