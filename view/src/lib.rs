// everything the gallery client does, minus the DOM
//
// the webapp crate renders ViewState and forwards events to the Controller;
// the Backend and Platform traits are the seams to the network and the
// browser, which keeps this crate testable off the web
pub mod backend;
pub mod config;
pub mod controller;
pub mod state;

pub use backend::{Backend, HttpBackend, Platform};
pub use config::ClientConfig;
pub use controller::Controller;
pub use state::{StateHandle, ViewState};
