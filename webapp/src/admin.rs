use dioxus::prelude::*;
use tracing::{debug, error};

use crate::common::platform::{use_controller, use_view};
use api::{category::Category, media::MediaKind, upload::UploadFile};
use view::state::StatusTone;

#[component]
fn FilePreview() -> Element {
    let view = use_view();

    let (preview, kind) = {
        let state = view.read();
        (state.upload.preview.clone(), state.upload.kind)
    };

    let Some(preview) = preview else {
        return rsx! {};
    };

    rsx! {
        div { class: "file-preview",
            match kind {
                MediaKind::Photo => rsx! {
                    img { src: "{preview}", alt: "Preview" }
                },
                MediaKind::Video => rsx! {
                    video { src: "{preview}", controls: true }
                },
            }
        }
    }
}

#[component]
fn UploadFormBox() -> Element {
    let ctl = use_controller();
    let view = use_view();

    let upload = view.read().upload.clone();

    let status_class = match upload.status.as_ref().map(|status| status.tone) {
        Some(StatusTone::Success) => "upload-status success",
        Some(StatusTone::Error) => "upload-status error",
        _ => "upload-status",
    };

    rsx! {
        form {
            class: "upload-form",
            onsubmit: move |event| async move {
                event.prevent_default();
                ctl.submit_upload().await
            },

            label { "Category" }
            select {
                name: "category",
                value: "{upload.category}",
                onchange: move |event| match event.value().parse::<Category>() {
                    Ok(category) => ctl.select_upload_category(category),
                    Err(err) => error!("{err}"),
                },
                for category in Category::ALL {
                    option { key: "{category}", value: "{category}", "{category.name()}" }
                }
            }

            label { "Type" }
            select {
                name: "type",
                value: "{upload.kind.as_str()}",
                onchange: move |event| {
                    let kind = if event.value() == MediaKind::Video.as_str() {
                        MediaKind::Video
                    } else {
                        MediaKind::Photo
                    };
                    ctl.select_upload_kind(kind)
                },
                option { value: "{MediaKind::Photo.as_str()}", "Photo" }
                option { value: "{MediaKind::Video.as_str()}", "Video" }
            }

            label { "File" }
            input {
                key: "{upload.picker_generation}",
                r#type: "file",
                name: "file",
                accept: "{upload.kind.accept()}",
                onchange: move |event| async move {
                    let Some(engine) = event.files() else {
                        return;
                    };
                    let Some(name) = engine.files().into_iter().next() else {
                        return;
                    };

                    match engine.read_file(&name).await {
                        Some(bytes) => {
                            debug!("read {name}, {} bytes", bytes.len());
                            ctl.preview_selected_file(UploadFile::new(name, bytes))
                        }
                        None => error!("failed to read {name} from the file picker"),
                    }
                },
            }

            FilePreview {}

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: upload.in_flight,
                if upload.in_flight { "Uploading..." } else { "Upload" }
            }

            if let Some(status) = &upload.status {
                div { class: "{status_class}", "{status.message}" }
            }
        }
    }
}

#[component]
pub fn AdminPanel() -> Element {
    let ctl = use_controller();

    rsx! {
        section { class: "admin-panel",
            div { class: "admin-header",
                h2 { "Upload Content" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| async move { ctl.logout().await },
                    "Logout"
                }
            }
            UploadFormBox {}
        }
    }
}
