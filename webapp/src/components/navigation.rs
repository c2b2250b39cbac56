use dioxus::prelude::*;

use crate::common::platform::{use_controller, use_view};

#[component]
fn MobileMenu() -> Element {
    let ctl = use_controller();
    let view = use_view();

    let menu_label = view.read().menu_label();

    rsx! {
        div { class: "mobile-menu",
            button {
                onclick: move |_| {
                    ctl.toggle_mobile_menu();
                    ctl.navigate_home();
                },
                "Home"
            }
            button {
                id: "admin-menu-btn",
                onclick: move |_| async move { ctl.show_admin_entry().await },
                "{menu_label}"
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let ctl = use_controller();
    let view = use_view();

    let menu_open = view.read().mobile_menu_open;

    rsx! {
        header { class: "app-header",
            div {
                class: "logo",
                onclick: move |_| ctl.navigate_home(),
                "✨ Decoration Gallery"
            }
            button {
                class: if menu_open { "hamburger active" } else { "hamburger" },
                onclick: move |_| ctl.toggle_mobile_menu(),
                span {}
                span {}
                span {}
            }
            if menu_open {
                MobileMenu {}
            }
        }
    }
}
