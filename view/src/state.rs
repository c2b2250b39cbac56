use std::{cell::RefCell, rc::Rc};

use api::{
    category::Category,
    media::{MediaItem, MediaKind, Tab},
    upload::UploadFile,
};

// the top-level panels; exactly one of these is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Gallery,
    Admin,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GalleryPanel {
    #[default]
    Loading,
    Items(Vec<MediaItem>),
    // shown both for an empty category and for a failed fetch
    Empty,
}

pub const LOADING_TEXT: &str = "Loading...";
pub const PLACEHOLDER_TEXT: &str = "No content available yet";

// what the lightbox is showing
#[derive(Clone, Debug, PartialEq)]
pub struct MediaModal {
    pub url: String,
    pub kind: MediaKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub open: bool,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadStatus {
    pub tone: StatusTone,
    pub message: String,
}

impl UploadStatus {
    pub fn info(message: impl Into<String>) -> Self {
        UploadStatus {
            tone: StatusTone::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        UploadStatus {
            tone: StatusTone::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        UploadStatus {
            tone: StatusTone::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadPanel {
    pub category: Category,
    pub kind: MediaKind,
    pub file: Option<UploadFile>,
    pub preview: Option<String>,
    pub status: Option<UploadStatus>,
    pub in_flight: bool,

    // bumped whenever the file picker has to be emptied; the webapp keys the
    // input element on it so that a new (empty) one is mounted
    pub picker_generation: u32,
}

impl Default for UploadPanel {
    fn default() -> Self {
        UploadPanel {
            category: Category::ALL[0],
            kind: MediaKind::Photo,
            file: None,
            preview: None,
            status: None,
            in_flight: false,
            picker_generation: 0,
        }
    }
}

impl UploadPanel {
    pub fn clear_file(&mut self) {
        self.file = None;
        self.preview = None;
        self.picker_generation = self.picker_generation.wrapping_add(1);
    }
}

// identifies one gallery fetch
//
// a result is only applied while its ticket is still the latest one issued,
// so a slow response for a category the user already left cannot overwrite
// whatever is on screen now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryTicket {
    pub seq: u64,
    pub category: Category,
    pub tab: Tab,
}

// the whole of the client state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub selected_category: Option<Category>,
    pub selected_tab: Tab,
    pub is_authenticated: bool,

    pub screen: Screen,
    pub gallery: GalleryPanel,
    gallery_seq: u64,

    pub media_modal: Option<MediaModal>,
    pub login: LoginForm,
    pub upload: UploadPanel,
    pub mobile_menu_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState::default()
    }

    pub fn menu_label(&self) -> &'static str {
        if self.is_authenticated {
            "Admin Panel"
        } else {
            "Admin Login"
        }
    }

    pub fn is_current(&self, ticket: &GalleryTicket) -> bool {
        ticket.seq == self.gallery_seq
            && self.screen == Screen::Gallery
            && self.selected_category == Some(ticket.category)
            && self.selected_tab == ticket.tab
    }

    // None when there is no category to load
    pub fn begin_gallery_load(&mut self) -> Option<GalleryTicket> {
        let category = self.selected_category?;

        self.gallery_seq += 1;
        self.gallery = GalleryPanel::Loading;

        Some(GalleryTicket {
            seq: self.gallery_seq,
            category,
            tab: self.selected_tab,
        })
    }

    // returns false if the result was stale and dropped
    pub fn finish_gallery_load(&mut self, ticket: GalleryTicket, urls: Option<Vec<String>>) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }

        self.gallery = match urls {
            Some(urls) if !urls.is_empty() => {
                GalleryPanel::Items(MediaItem::from_urls(urls, ticket.tab))
            }
            _ => GalleryPanel::Empty,
        };

        true
    }
}

// shared access to the single ViewState
//
// the closures must not await; nothing holds the state across a suspension
// point, so a late network callback never collides with a render
pub trait StateHandle {
    fn with_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;

    fn with_state_mut<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R;
}

impl StateHandle for Rc<RefCell<ViewState>> {
    fn with_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.borrow())
    }

    fn with_state_mut<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
