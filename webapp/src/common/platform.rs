use async_trait::async_trait;
use dioxus::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;

use view::{Controller, HttpBackend, Platform, StateHandle, ViewState, backend::stored_token};

use crate::common::storage::*;

// the dioxus side of the controller's state
//
// reads inside the controller use peek so that async handlers do not
// subscribe whatever scope happens to be current
#[derive(Clone, Copy, PartialEq)]
pub struct SignalState(pub Signal<ViewState>);

impl StateHandle for SignalState {
    fn with_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.0.with_peek(f)
    }

    fn with_state_mut<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut signal = self.0;
        signal.with_mut(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserPlatform {
    token_key: &'static str,
}

impl BrowserPlatform {
    pub fn new(token_key: &'static str) -> Self {
        BrowserPlatform { token_key }
    }
}

#[async_trait(?Send)]
impl Platform for BrowserPlatform {
    fn load_token(&self) -> Option<String> {
        stored_token(get_local_storage(self.token_key))
    }

    fn store_token(&self, token: &str) {
        set_local_storage(self.token_key, token)
    }

    fn clear_token(&self) {
        delete_local_storage(self.token_key)
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.alert_with_message(message) {
                    warn!("alert failed: {err:?}");
                }
            }
            None => warn!("no window to show alert: {message}"),
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn pause_media(&self) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };

        // images have nothing to stop
        let Ok(Some(element)) = document.query_selector("#media-modal video") else {
            return;
        };

        match element.dyn_into::<web_sys::HtmlMediaElement>() {
            Ok(video) => {
                if let Err(err) = video.pause() {
                    warn!("failed to pause video: {err:?}");
                }
                video.set_current_time(0.0);
                debug!("paused lightbox video");
            }
            Err(_) => warn!("#media-modal video is not a media element"),
        }
    }

    async fn sleep(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await
    }
}

pub type AppController = Controller<SignalState, HttpBackend, BrowserPlatform>;

// every component reaches the controller through context, provided once in App
pub fn use_controller() -> AppController {
    use_context::<AppController>()
}

// subscribing handle on the state, for rendering
pub fn use_view() -> Signal<ViewState> {
    use_controller().state().0
}
