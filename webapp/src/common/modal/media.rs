use dioxus::prelude::*;

use crate::common::platform::{use_controller, use_view};
use api::media::MediaKind;

// the lightbox
//
// closing goes through the controller so that a playing video is paused
// before the element disappears
#[component]
pub fn MediaModalBox() -> Element {
    let ctl = use_controller();
    let view = use_view();

    let Some(modal) = view.read().media_modal.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "media-modal",
            class: "modal active",
            onclick: move |_| ctl.close_media_modal(),
            div {
                class: "modal-content",
                onclick: move |event| event.stop_propagation(),
                span {
                    class: "modal-close",
                    onclick: move |_| ctl.close_media_modal(),
                    "×"
                }
                match modal.kind {
                    MediaKind::Photo => rsx! {
                        img { src: "{modal.url}", alt: "Photo" }
                    },
                    MediaKind::Video => rsx! {
                        video { src: "{modal.url}", controls: true, autoplay: true }
                    },
                }
            }
        }
    }
}
