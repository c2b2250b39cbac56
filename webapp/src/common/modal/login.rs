use dioxus::prelude::*;

use crate::common::platform::{use_controller, use_view};

#[component]
pub fn LoginModalBox() -> Element {
    let ctl = use_controller();
    let view = use_view();

    let login = view.read().login.clone();

    if !login.open {
        return rsx! {};
    }

    rsx! {
        div { class: "modal active",
            form {
                class: "login-box",
                onsubmit: move |event| async move {
                    event.prevent_default();

                    let (email, password) = {
                        let state = view.peek();
                        (state.login.email.clone(), state.login.password.clone())
                    };

                    ctl.login(&email, &password).await
                },
                span {
                    class: "modal-close",
                    onclick: move |_| ctl.close_login_modal(),
                    "×"
                }
                h2 { "Admin Login" }
                p { "A password has been sent to the admin email." }
                input {
                    r#type: "email",
                    name: "username",
                    placeholder: "Email",
                    value: "{login.email}",
                    oninput: move |event| ctl.set_login_email(event.value()),
                }
                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    value: "{login.password}",
                    oninput: move |event| ctl.set_login_password(event.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Login" }
                span {
                    class: "forgot-link",
                    onclick: move |_| async move {
                        let email = view.peek().login.email.clone();
                        ctl.request_password_reset(&email).await
                    },
                    "Forgot Password?"
                }
            }
        }
    }
}
