#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;
use common::{
    modal::{LoginModalBox, MediaModalBox},
    platform::{AppController, BrowserPlatform, SignalState},
};

mod components;
use components::navigation::NavBar;

mod admin;
use admin::AdminPanel;

mod gallery;
use gallery::GalleryView;

mod home;
use home::Home;

use view::{ClientConfig, HttpBackend, ViewState, state::Screen};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// there is no config file for a static bundle, so the deployment-specific
// bits are baked in at build time
fn client_config() -> ClientConfig {
    let mut config = ClientConfig::default();

    if let Some(prefix) = option_env!("GALLERY_API_PREFIX") {
        config.api_prefix = prefix;
    }

    if let Some(email) = option_env!("GALLERY_ADMIN_EMAIL") {
        config.admin_email = email;
    }

    config
}

#[component]
pub fn App() -> Element {
    let view_signal = use_signal(ViewState::new);

    let ctl = use_context_provider(|| {
        let config = client_config();

        AppController::new(
            SignalState(view_signal),
            HttpBackend::new(config.api_prefix),
            BrowserPlatform::new(config.token_key),
            config,
        )
    });

    use_future(move || async move { ctl.initialize().await });

    let screen = view_signal.read().screen;

    rsx! {
        style { "{common::style::APP_STYLES}" }
        NavBar {}
        main {
            match screen {
                Screen::Home => rsx! {
                    Home {}
                },
                Screen::Gallery => rsx! {
                    GalleryView {}
                },
                Screen::Admin => rsx! {
                    AdminPanel {}
                },
            }
        }
        MediaModalBox {}
        LoginModalBox {}
    }
}
