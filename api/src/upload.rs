use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{category::Category, media::MediaKind};

// structs and types

// client-side ceiling on an upload, 5 MiB
//
// this only spares the admin a doomed request; the backend has to enforce
// its own limit
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

// a file picked in the browser, read fully into memory
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    // the browser does not always hand us a content type, so guess it from
    // the file name the same way the server side does
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_owned();

        UploadFile { name, mime, bytes }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    // local preview, no network involved
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

// what gets posted as multipart/form-data
#[derive(Clone, Debug, PartialEq)]
pub struct UploadForm {
    pub category: Category,
    pub kind: MediaKind,
    pub file: UploadFile,
}

// reasons an upload never leaves the browser
//
// the display strings are shown to the admin as-is
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select a file")]
    NoFile,
    #[error("File is too large. Maximum size is {}.", human_size(*.limit))]
    TooLarge { size: u64, limit: u64 },
    #[error("Please login again")]
    NotAuthenticated,
}

// 5 MiB reads "5MB", the way the form has always put it
pub fn human_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;

    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= MIB {
        format!("{:.1}MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{bytes} bytes")
    }
}

pub fn validate_file(file: Option<&UploadFile>, limit: u64) -> Result<&UploadFile, UploadError> {
    let file = file.ok_or(UploadError::NoFile)?;

    if file.size() > limit {
        return Err(UploadError::TooLarge {
            size: file.size(),
            limit,
        });
    }

    Ok(file)
}

// messages

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResp {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn js_err(err: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

fn form_data(form: &UploadForm) -> anyhow::Result<web_sys::FormData> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(form.file.bytes.as_slice()));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&form.file.mime);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;

    let data = web_sys::FormData::new().map_err(js_err)?;
    data.append_with_blob_and_filename("file", &blob, &form.file.name)
        .map_err(js_err)?;
    data.append_with_str("category", form.category.id())
        .map_err(js_err)?;
    data.append_with_str("type", form.kind.as_str())
        .map_err(js_err)?;

    Ok(data)
}

pub async fn upload(prefix: &str, token: &str, form: &UploadForm) -> anyhow::Result<UploadResp> {
    let resp = gloo_net::http::Request::post(format!("{prefix}/upload").as_str())
        .header("Authorization", &format!("Bearer {token}"))
        .body(form_data(form)?)?
        .send()
        .await?;

    crate::decode(resp).await
}
