use dioxus::prelude::*;

use crate::common::platform::{use_controller, use_view};
use api::media::{MediaItem, MediaKind};
use view::state::{GalleryPanel, LOADING_TEXT, PLACEHOLDER_TEXT};

// stand-in for a photo that fails to load
const FALLBACK_IMAGE: &str = "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 300 300%22><rect fill=%22%23f0f0f0%22 width=%22300%22 height=%22300%22/><text x=%2250%25%22 y=%2250%25%22 text-anchor=%22middle%22 dy=%22.3em%22 fill=%22%23999%22 font-size=%2220%22>Image</text></svg>";

#[derive(Clone, PartialEq, Props)]
struct MediaTileProps {
    item: MediaItem,
}

#[component]
fn MediaTile(props: MediaTileProps) -> Element {
    let ctl = use_controller();
    let mut broken = use_signal(|| false);

    let MediaItem { url, kind } = props.item;
    let src = if broken() {
        FALLBACK_IMAGE.to_owned()
    } else {
        url.clone()
    };

    rsx! {
        div {
            class: "gallery-item",
            onclick: move |_| ctl.open_media_modal(url.clone(), kind),
            match kind {
                MediaKind::Photo => rsx! {
                    img {
                        src: "{src}",
                        alt: "Photo",
                        onerror: move |_| broken.set(true),
                    }
                },
                MediaKind::Video => rsx! {
                    video { src: "{src}", preload: "metadata" }
                },
            }
        }
    }
}

#[component]
pub fn MediaGrid() -> Element {
    let view = use_view();

    let panel = view.read().gallery.clone();

    rsx! {
        div { class: "gallery-grid",
            match panel {
                GalleryPanel::Loading => rsx! {
                    div { class: "empty-gallery", "{LOADING_TEXT}" }
                },
                GalleryPanel::Empty => rsx! {
                    div { class: "empty-gallery", "{PLACEHOLDER_TEXT}" }
                },
                GalleryPanel::Items(items) => rsx! {
                    for item in items {
                        MediaTile { key: "{item.url}", item: item.clone() }
                    }
                },
            }
        }
    }
}
