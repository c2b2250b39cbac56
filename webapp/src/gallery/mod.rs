use dioxus::prelude::*;

use crate::common::platform::{use_controller, use_view};
use api::media::Tab;

pub mod grid;
use grid::MediaGrid;

#[derive(Clone, PartialEq, Props)]
struct TabButtonProps {
    tab: Tab,
    active: bool,
}

// the active marker comes from the selected tab, not from whichever button
// happened to be clicked
#[component]
fn TabButton(props: TabButtonProps) -> Element {
    let ctl = use_controller();
    let tab = props.tab;

    rsx! {
        button {
            class: if props.active { "tab-btn active" } else { "tab-btn" },
            onclick: move |_| async move { ctl.switch_tab(tab).await },
            "{tab.label()}"
        }
    }
}

#[component]
pub fn GalleryView() -> Element {
    let ctl = use_controller();
    let view = use_view();

    let (category, selected_tab) = {
        let state = view.read();
        (state.selected_category, state.selected_tab)
    };

    let title = category.map(|category| category.name()).unwrap_or_default();

    rsx! {
        section { class: "gallery-view",
            div { class: "gallery-header",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| ctl.navigate_home(),
                    "← Back"
                }
                h2 { "{title}" }
            }
            div { class: "tabs",
                for tab in Tab::ALL {
                    TabButton { key: "{tab}", tab, active: tab == selected_tab }
                }
            }
            MediaGrid {}
        }
    }
}
