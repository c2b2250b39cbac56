use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

// structs and types

// the sub-filter within a category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Photos,
    Videos,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Photos, Tab::Videos];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Photos => "photos",
            Tab::Videos => "videos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Photos => "Photos",
            Tab::Videos => "Videos",
        }
    }

    pub fn kind(self) -> MediaKind {
        match self {
            Tab::Photos => MediaKind::Photo,
            Tab::Videos => MediaKind::Video,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// what a single item is, which is also the "type" field of an upload
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Photo,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        }
    }

    pub fn tab(self) -> Tab {
        match self {
            MediaKind::Photo => Tab::Photos,
            MediaKind::Video => Tab::Videos,
        }
    }

    // value for the accept attribute of the file picker
    pub fn accept(self) -> &'static str {
        match self {
            MediaKind::Photo => "image/*",
            MediaKind::Video => "video/*",
        }
    }
}

// the backend only hands out urls; the kind is implied by the tab they
// were fetched for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn from_urls(urls: Vec<String>, tab: Tab) -> Vec<MediaItem> {
        urls.into_iter()
            .map(|url| MediaItem {
                url,
                kind: tab.kind(),
            })
            .collect()
    }
}

// messages

pub fn media_path(prefix: &str, category: Category, tab: Tab) -> String {
    format!("{prefix}/media/{category}/{tab}")
}

// list the urls of every item in a category/tab pair
pub async fn get_media(prefix: &str, category: Category, tab: Tab) -> anyhow::Result<Vec<String>> {
    let resp = gloo_net::http::Request::get(&media_path(prefix, category, tab))
        .send()
        .await?;

    crate::decode(resp).await
}
