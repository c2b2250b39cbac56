use tracing::{debug, error, info, warn};

use api::{
    auth::{ForgotPasswordReq, LoginReq},
    category::Category,
    media::{MediaKind, Tab},
    upload::{UploadError, UploadFile, UploadForm, validate_file},
};

use crate::{
    backend::{Backend, Platform},
    config::ClientConfig,
    state::{MediaModal, Screen, StateHandle, UploadStatus},
};

pub const MISSING_CREDENTIALS: &str = "Please enter email and password";
pub const INVALID_CREDENTIALS: &str =
    "Invalid credentials. If you forgot your password, use the \"Forgot Password?\" link.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const MISSING_EMAIL: &str = "Please enter your email";
pub const RESET_FAILED: &str = "Failed to send password reset email. Please try again.";
pub const UPLOADING: &str = "Uploading your file...";
pub const UPLOAD_DONE: &str = "✓ Content uploaded successfully! Redirecting to view...";
pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";

// the view controller
//
// every user action in the webapp ends up in one of these methods.  the state
// lives behind H and is only ever touched in short synchronous closures, so
// any number of these futures can be in flight at once
#[derive(Clone, Copy, Debug)]
pub struct Controller<H, B, P> {
    state: H,
    backend: B,
    platform: P,
    config: ClientConfig,
}

impl<H, B, P> Controller<H, B, P>
where
    H: StateHandle,
    B: Backend,
    P: Platform,
{
    pub fn new(state: H, backend: B, platform: P, config: ClientConfig) -> Self {
        Controller {
            state,
            backend,
            platform,
            config,
        }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // startup
    //
    // the tiles and the upload selector are static, so all that is left is
    // asking the backend whether we already have a session.  the answer can
    // only grant the session, never revoke it: a login that finished while
    // the check was in flight must survive a late "no"
    pub async fn initialize(&self) {
        let authenticated = match self.backend.check_auth().await {
            Ok(resp) => resp.authenticated,
            Err(err) => {
                error!("auth check failed: {err}");
                false
            }
        };

        debug!("initial auth state: {authenticated}");

        if authenticated {
            self.state
                .with_state_mut(|state| state.is_authenticated = true);
        }
    }

    // navigation

    pub async fn navigate_to_category(&self, category: Category) {
        self.state.with_state_mut(|state| {
            state.selected_category = Some(category);
            state.screen = Screen::Gallery;
        });

        self.platform.scroll_to_top();

        self.load_gallery().await
    }

    pub async fn load_gallery(&self) {
        let Some(ticket) = self.state.with_state_mut(|state| state.begin_gallery_load()) else {
            return;
        };

        let urls = match self.backend.media(ticket.category, ticket.tab).await {
            Ok(urls) => Some(urls),
            Err(err) => {
                error!("failed to load {}/{}: {err}", ticket.category, ticket.tab);
                None
            }
        };

        let applied = self
            .state
            .with_state_mut(|state| state.finish_gallery_load(ticket, urls));

        if !applied {
            debug!(
                "discarding stale gallery result for {}/{}",
                ticket.category, ticket.tab
            );
        }
    }

    pub async fn switch_tab(&self, tab: Tab) {
        self.state.with_state_mut(|state| state.selected_tab = tab);

        self.load_gallery().await
    }

    pub fn navigate_home(&self) {
        self.state.with_state_mut(|state| {
            state.screen = Screen::Home;
            state.selected_category = None;
        });

        self.platform.scroll_to_top();
    }

    pub fn show_admin_panel(&self) {
        self.state
            .with_state_mut(|state| state.screen = Screen::Admin);

        self.platform.scroll_to_top();
    }

    pub fn toggle_mobile_menu(&self) {
        self.state
            .with_state_mut(|state| state.mobile_menu_open = !state.mobile_menu_open);
    }

    // lightbox

    pub fn open_media_modal(&self, url: impl Into<String>, kind: MediaKind) {
        let url = url.into();

        self.state
            .with_state_mut(|state| state.media_modal = Some(MediaModal { url, kind }));
    }

    pub fn close_media_modal(&self) {
        self.platform.pause_media();

        self.state.with_state_mut(|state| state.media_modal = None);
    }

    // authentication

    pub fn set_login_email(&self, email: String) {
        self.state.with_state_mut(|state| state.login.email = email);
    }

    pub fn set_login_password(&self, password: String) {
        self.state
            .with_state_mut(|state| state.login.password = password);
    }

    pub fn close_login_modal(&self) {
        self.state.with_state_mut(|state| state.login.open = false);
    }

    // the entry point behind the admin menu button
    //
    // this is a single-admin deployment: the form is filled in with the one
    // admin address and a password is mailed to it right away
    pub async fn show_admin_entry(&self) {
        let authenticated = self.state.with_state_mut(|state| {
            state.mobile_menu_open = false;
            state.is_authenticated
        });

        if authenticated {
            return self.show_admin_panel();
        }

        let email = self.config.admin_email.to_owned();

        self.state.with_state_mut(|state| {
            state.login.open = true;
            state.login.email = email.clone();
        });

        self.request_password_reset(&email).await
    }

    pub async fn login(&self, email: &str, password: &str) {
        if email.is_empty() || password.is_empty() {
            return self.platform.alert(MISSING_CREDENTIALS);
        }

        let req = LoginReq {
            username: email.to_owned(),
            password: password.to_owned(),
        };

        match self.backend.login(&req).await {
            Ok(resp) if resp.success => {
                match resp.token {
                    Some(token) => self.platform.store_token(&token),
                    None => warn!("login succeeded without a token; uploads will be refused"),
                }

                info!("logged in as {email}");

                self.state.with_state_mut(|state| {
                    state.is_authenticated = true;
                    state.login.open = false;
                    state.login.password.clear();
                });

                self.show_admin_panel();
            }
            Ok(_) => self.platform.alert(INVALID_CREDENTIALS),
            Err(err) => {
                error!("login request failed: {err}");
                self.platform.alert(LOGIN_FAILED);
            }
        }
    }

    // whatever the backend says is shown verbatim
    pub async fn request_password_reset(&self, email: &str) {
        if email.is_empty() {
            return self.platform.alert(MISSING_EMAIL);
        }

        let req = ForgotPasswordReq {
            email: email.to_owned(),
        };

        match self.backend.forgot_password(&req).await {
            Ok(resp) => self.platform.alert(&resp.message),
            Err(err) => {
                error!("password reset request failed: {err}");
                self.platform.alert(RESET_FAILED);
            }
        }
    }

    // the local session is torn down before the backend is told, so a hung
    // logout request cannot keep the upload form on screen
    pub async fn logout(&self) {
        self.state.with_state_mut(|state| {
            state.is_authenticated = false;
            state.screen = Screen::Home;
        });
        self.platform.clear_token();
        self.platform.scroll_to_top();

        if let Err(err) = self.backend.logout().await {
            warn!("logout request failed: {err}");
        }
    }

    // uploads

    pub fn select_upload_category(&self, category: Category) {
        self.state
            .with_state_mut(|state| state.upload.category = category);
    }

    // a picked file of the other kind would be filtered by the new accept
    // attribute, so it is dropped along with its preview
    pub fn select_upload_kind(&self, kind: MediaKind) {
        self.state.with_state_mut(|state| {
            if state.upload.kind != kind {
                state.upload.kind = kind;
                state.upload.clear_file();
            }
        });
    }

    pub fn preview_selected_file(&self, file: UploadFile) {
        let preview = file.data_url();

        self.state.with_state_mut(|state| {
            state.upload.file = Some(file);
            state.upload.preview = Some(preview);
            state.upload.status = None;
        });
    }

    pub async fn submit_upload(&self) {
        let limit = self.config.max_upload_bytes;

        // validate, look up the token and claim the submit button under a
        // single write
        let claim = self.state.with_state_mut(|state| {
            if state.upload.in_flight {
                return None;
            }

            let form = match validate_file(state.upload.file.as_ref(), limit) {
                Ok(file) => UploadForm {
                    category: state.upload.category,
                    kind: state.upload.kind,
                    file: file.clone(),
                },
                Err(err) => {
                    state.upload.status = Some(UploadStatus::error(err.to_string()));
                    return None;
                }
            };

            let Some(token) = self.platform.load_token() else {
                return Some(Err(UploadError::NotAuthenticated));
            };

            state.upload.in_flight = true;
            state.upload.status = Some(UploadStatus::info(UPLOADING));

            Some(Ok((form, token)))
        });

        let (form, token) = match claim {
            Some(Ok(claimed)) => claimed,
            Some(Err(err)) => return self.platform.alert(&err.to_string()),
            None => return,
        };

        let result = self.backend.upload(&token, &form).await;

        let succeeded = self.state.with_state_mut(|state| {
            state.upload.in_flight = false;

            match result {
                Ok(resp) if resp.success => {
                    state.upload.status = Some(UploadStatus::success(UPLOAD_DONE));
                    state.upload.clear_file();
                    true
                }
                Ok(resp) => {
                    let message = resp.message.unwrap_or_else(|| String::from("unknown error"));
                    state.upload.status =
                        Some(UploadStatus::error(format!("Upload failed: {message}")));
                    false
                }
                Err(err) => {
                    error!("upload of {} failed: {err}", form.file.name);
                    state.upload.status = Some(UploadStatus::error(UPLOAD_FAILED));
                    false
                }
            }
        });

        if !succeeded {
            return;
        }

        info!(
            "uploaded {} to {}/{}",
            form.file.name,
            form.category,
            form.kind.tab()
        );

        self.platform.sleep(self.config.redirect_delay_ms).await;

        self.state
            .with_state_mut(|state| state.selected_tab = form.kind.tab());

        self.navigate_to_category(form.category).await
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use async_trait::async_trait;
    use futures::{
        FutureExt,
        channel::oneshot,
        executor::block_on,
        future::{join, pending},
    };
    use pretty_assertions::assert_eq;

    use api::{
        auth::{CheckAuthResp, ForgotPasswordResp, LoginResp},
        media::MediaItem,
        upload::{MAX_UPLOAD_BYTES, UploadResp},
    };

    use super::*;
    use crate::state::{GalleryPanel, PLACEHOLDER_TEXT, StatusTone, ViewState};

    // canned responses; anything not set up answers with a transport error
    #[derive(Default)]
    struct MockBackend {
        calls: RefCell<Vec<String>>,
        authenticated: Option<bool>,
        media: HashMap<(Category, Tab), Vec<String>>,
        login: Option<LoginResp>,
        reset_message: Option<String>,
        upload: Option<UploadResp>,

        // check-auth waits on this when set
        auth_gate: RefCell<Option<oneshot::Receiver<bool>>>,
        logout_hangs: bool,
        upload_hangs: bool,
    }

    impl MockBackend {
        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn count(&self, prefix: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|call| call.starts_with(prefix))
                .count()
        }
    }

    fn unreachable() -> anyhow::Error {
        anyhow::Error::msg("connection refused")
    }

    #[async_trait(?Send)]
    impl Backend for MockBackend {
        async fn check_auth(&self) -> anyhow::Result<CheckAuthResp> {
            self.record(String::from("/api/check-auth"));

            let gate = self.auth_gate.borrow_mut().take();
            if let Some(gate) = gate {
                let authenticated = gate.await?;
                return Ok(CheckAuthResp { authenticated });
            }

            self.authenticated
                .map(|authenticated| CheckAuthResp { authenticated })
                .ok_or_else(unreachable)
        }

        async fn media(&self, category: Category, tab: Tab) -> anyhow::Result<Vec<String>> {
            self.record(format!("/api/media/{category}/{tab}"));
            self.media.get(&(category, tab)).cloned().ok_or_else(unreachable)
        }

        async fn login(&self, req: &LoginReq) -> anyhow::Result<LoginResp> {
            self.record(format!("/api/login {}", req.username));
            self.login.clone().ok_or_else(unreachable)
        }

        async fn forgot_password(&self, req: &ForgotPasswordReq) -> anyhow::Result<ForgotPasswordResp> {
            self.record(format!("/api/forgot-password {}", req.email));
            self.reset_message
                .clone()
                .map(|message| ForgotPasswordResp { message })
                .ok_or_else(unreachable)
        }

        async fn logout(&self) -> anyhow::Result<()> {
            self.record(String::from("/api/logout"));
            if self.logout_hangs {
                pending::<()>().await;
            }
            Err(unreachable())
        }

        async fn upload(&self, token: &str, form: &UploadForm) -> anyhow::Result<UploadResp> {
            self.record(format!(
                "/api/upload {token} {} {}",
                form.category,
                form.kind.as_str()
            ));
            if self.upload_hangs {
                pending::<()>().await;
            }
            self.upload.clone().ok_or_else(unreachable)
        }
    }

    #[derive(Default)]
    struct MockPlatform {
        token: RefCell<Option<String>>,
        alerts: RefCell<Vec<String>>,
        scrolls: RefCell<usize>,
        pauses: RefCell<usize>,
        sleeps: RefCell<Vec<u32>>,
    }

    #[async_trait(?Send)]
    impl Platform for MockPlatform {
        fn load_token(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn store_token(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_owned());
        }

        fn clear_token(&self) {
            *self.token.borrow_mut() = None;
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_owned());
        }

        fn scroll_to_top(&self) {
            *self.scrolls.borrow_mut() += 1;
        }

        fn pause_media(&self) {
            *self.pauses.borrow_mut() += 1;
        }

        async fn sleep(&self, millis: u32) {
            self.sleeps.borrow_mut().push(millis);
        }
    }

    type TestController<'a> = Controller<Rc<RefCell<ViewState>>, &'a MockBackend, &'a MockPlatform>;

    fn controller<'a>(backend: &'a MockBackend, platform: &'a MockPlatform) -> TestController<'a> {
        Controller::new(
            Rc::new(RefCell::new(ViewState::new())),
            backend,
            platform,
            ClientConfig::default(),
        )
    }

    fn snapshot(ctl: &TestController<'_>) -> ViewState {
        ctl.state().with_state(|state| state.clone())
    }

    fn placeholder(panel: &GalleryPanel) -> Option<&'static str> {
        match panel {
            GalleryPanel::Empty => Some(PLACEHOLDER_TEXT),
            _ => None,
        }
    }

    #[test]
    fn initialize_reads_auth() {
        let backend = MockBackend {
            authenticated: Some(true),
            ..Default::default()
        };
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.initialize());

        let state = snapshot(&ctl);
        assert!(state.is_authenticated);
        assert_eq!(state.menu_label(), "Admin Panel");
    }

    #[test]
    fn initialize_failure_means_logged_out() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.initialize());

        assert!(!snapshot(&ctl).is_authenticated);
        assert!(platform.alerts.borrow().is_empty());
    }

    #[test]
    fn empty_and_unreachable_galleries_match() {
        for category in Category::ALL {
            for tab in Tab::ALL {
                let mut empty = MockBackend::default();
                empty.media.insert((category, tab), Vec::new());
                let failing = MockBackend::default();
                let platform = MockPlatform::default();

                let with_empty = controller(&empty, &platform);
                with_empty.state().with_state_mut(|state| state.selected_tab = tab);
                block_on(with_empty.navigate_to_category(category));

                let with_failure = controller(&failing, &platform);
                with_failure.state().with_state_mut(|state| state.selected_tab = tab);
                block_on(with_failure.navigate_to_category(category));

                let empty_text = placeholder(&snapshot(&with_empty).gallery);
                let failure_text = placeholder(&snapshot(&with_failure).gallery);
                assert_eq!(empty_text, Some(PLACEHOLDER_TEXT));
                assert_eq!(empty_text, failure_text);
            }
        }
    }

    #[test]
    fn category_lists_its_photos() {
        let mut backend = MockBackend::default();
        backend.media.insert(
            (Category::Marriage, Tab::Photos),
            vec![String::from("a.jpg"), String::from("b.jpg")],
        );
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.navigate_to_category(Category::Marriage));

        let state = snapshot(&ctl);
        assert_eq!(state.screen, Screen::Gallery);
        assert_eq!(state.selected_category, Some(Category::Marriage));
        assert_eq!(*platform.scrolls.borrow(), 1);
        match state.gallery {
            GalleryPanel::Items(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(
                    items[0],
                    MediaItem {
                        url: String::from("a.jpg"),
                        kind: MediaKind::Photo
                    }
                );
            }
            other => panic!("expected items, got {other:?}"),
        }
    }

    #[test]
    fn switching_tab_refetches_once() {
        let mut backend = MockBackend::default();
        backend
            .media
            .insert((Category::Birthday, Tab::Videos), vec![String::from("party.mp4")]);
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.navigate_to_category(Category::Birthday));
        block_on(ctl.switch_tab(Tab::Videos));

        assert_eq!(backend.count("/api/media/birthday/videos"), 1);
        assert_eq!(snapshot(&ctl).selected_tab, Tab::Videos);
    }

    #[test]
    fn home_clears_category() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.navigate_to_category(Category::Temple));
        ctl.navigate_home();

        let state = snapshot(&ctl);
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.selected_category, None);
        assert_eq!(*platform.scrolls.borrow(), 2);
    }

    #[test]
    fn closing_lightbox_pauses_playback() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        ctl.open_media_modal("clip.mp4", MediaKind::Video);
        assert_eq!(
            snapshot(&ctl).media_modal,
            Some(MediaModal {
                url: String::from("clip.mp4"),
                kind: MediaKind::Video
            })
        );

        ctl.close_media_modal();
        assert_eq!(snapshot(&ctl).media_modal, None);
        assert_eq!(*platform.pauses.borrow(), 1);
    }

    #[test]
    fn login_needs_both_fields() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.login("", "secret"));
        block_on(ctl.login("x@x.com", ""));

        assert!(backend.calls().is_empty());
        assert_eq!(
            *platform.alerts.borrow(),
            vec![MISSING_CREDENTIALS, MISSING_CREDENTIALS]
        );
    }

    #[test]
    fn login_then_logout() {
        let backend = MockBackend {
            login: Some(LoginResp {
                success: true,
                token: Some(String::from("abc123")),
            }),
            ..Default::default()
        };
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);
        ctl.state().with_state_mut(|state| state.login.open = true);

        block_on(ctl.login("x@x.com", "right"));

        let state = snapshot(&ctl);
        assert!(state.is_authenticated);
        assert!(!state.login.open);
        assert_eq!(state.screen, Screen::Admin);
        assert_eq!(platform.load_token(), Some(String::from("abc123")));

        // the logout endpoint fails here, which must not matter
        block_on(ctl.logout());

        let state = snapshot(&ctl);
        assert!(!state.is_authenticated);
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.menu_label(), "Admin Login");
        assert_eq!(platform.load_token(), None);
        assert_eq!(backend.count("/api/logout"), 1);
    }

    #[test]
    fn rejected_login_stays_logged_out() {
        let backend = MockBackend {
            login: Some(LoginResp::default()),
            ..Default::default()
        };
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.login("x@x.com", "wrong"));

        assert!(!snapshot(&ctl).is_authenticated);
        assert_eq!(platform.load_token(), None);
        assert_eq!(*platform.alerts.borrow(), vec![INVALID_CREDENTIALS]);
    }

    #[test]
    fn unreachable_login_has_its_own_message() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.login("x@x.com", "pw"));

        assert_eq!(*platform.alerts.borrow(), vec![LOGIN_FAILED]);
    }

    #[test]
    fn admin_entry_mails_a_password_once() {
        let backend = MockBackend {
            reset_message: Some(String::from("Password sent to your email")),
            ..Default::default()
        };
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);
        ctl.state().with_state_mut(|state| state.mobile_menu_open = true);

        block_on(ctl.show_admin_entry());

        let email = ClientConfig::default().admin_email;
        assert_eq!(
            backend.calls(),
            vec![format!("/api/forgot-password {email}")]
        );

        let state = snapshot(&ctl);
        assert!(state.login.open);
        assert_eq!(state.login.email, email);
        assert!(!state.mobile_menu_open);
        assert_eq!(
            *platform.alerts.borrow(),
            vec!["Password sent to your email"]
        );
    }

    #[test]
    fn admin_entry_when_logged_in_skips_login() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);
        ctl.state().with_state_mut(|state| state.is_authenticated = true);

        block_on(ctl.show_admin_entry());

        assert!(backend.calls().is_empty());
        assert_eq!(snapshot(&ctl).screen, Screen::Admin);
    }

    #[test]
    fn reset_needs_an_email() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.request_password_reset(""));
        block_on(ctl.request_password_reset("x@x.com"));

        assert_eq!(backend.count("/api/forgot-password"), 1);
        assert_eq!(*platform.alerts.borrow(), vec![MISSING_EMAIL, RESET_FAILED]);
    }

    #[test]
    fn oversized_upload_never_leaves() {
        let backend = MockBackend {
            upload: Some(UploadResp {
                success: true,
                message: None,
            }),
            ..Default::default()
        };
        let platform = MockPlatform::default();
        platform.store_token("abc123");
        let ctl = controller(&backend, &platform);

        for category in Category::ALL {
            for kind in [MediaKind::Photo, MediaKind::Video] {
                ctl.select_upload_category(category);
                ctl.select_upload_kind(kind);
                ctl.preview_selected_file(UploadFile::new(
                    "big.bin",
                    vec![0; MAX_UPLOAD_BYTES as usize + 1],
                ));

                block_on(ctl.submit_upload());

                let status = snapshot(&ctl).upload.status.unwrap();
                assert_eq!(status.tone, StatusTone::Error);
                assert_eq!(status.message, "File is too large. Maximum size is 5MB.");
            }
        }

        assert!(backend.calls().is_empty());
    }

    #[test]
    fn upload_without_file_or_token() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        block_on(ctl.submit_upload());
        assert_eq!(
            snapshot(&ctl).upload.status.unwrap().message,
            "Please select a file"
        );

        ctl.preview_selected_file(UploadFile::new("a.jpg", vec![1, 2, 3]));
        block_on(ctl.submit_upload());

        assert!(backend.calls().is_empty());
        assert_eq!(*platform.alerts.borrow(), vec!["Please login again"]);
        assert!(!snapshot(&ctl).upload.in_flight);
    }

    #[test]
    fn successful_upload_opens_its_gallery() {
        let mut backend = MockBackend {
            upload: Some(UploadResp {
                success: true,
                message: None,
            }),
            ..Default::default()
        };
        backend
            .media
            .insert((Category::Haldi, Tab::Videos), vec![String::from("new.mp4")]);
        let platform = MockPlatform::default();
        platform.store_token("abc123");
        let ctl = controller(&backend, &platform);

        ctl.select_upload_category(Category::Haldi);
        ctl.select_upload_kind(MediaKind::Video);
        ctl.preview_selected_file(UploadFile::new("new.mp4", vec![0; 16]));
        block_on(ctl.submit_upload());

        assert_eq!(
            backend.calls(),
            vec![
                String::from("/api/upload abc123 haldi video"),
                String::from("/api/media/haldi/videos"),
            ]
        );
        assert_eq!(*platform.sleeps.borrow(), vec![1500]);

        let state = snapshot(&ctl);
        assert_eq!(state.screen, Screen::Gallery);
        assert_eq!(state.selected_tab, Tab::Videos);
        assert_eq!(state.upload.file, None);
        assert!(!state.upload.in_flight);
        assert_eq!(state.upload.status.unwrap().tone, StatusTone::Success);
    }

    #[test]
    fn rejected_upload_shows_backend_message() {
        let backend = MockBackend {
            upload: Some(UploadResp {
                success: false,
                message: Some(String::from("Unsupported file type")),
            }),
            ..Default::default()
        };
        let platform = MockPlatform::default();
        platform.store_token("abc123");
        let ctl = controller(&backend, &platform);

        ctl.preview_selected_file(UploadFile::new("a.jpg", vec![1]));
        block_on(ctl.submit_upload());

        let state = snapshot(&ctl);
        assert_eq!(
            state.upload.status.unwrap().message,
            "Upload failed: Unsupported file type"
        );
        assert!(state.upload.file.is_some());
        assert!(!state.upload.in_flight);
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn upload_in_flight_blocks_resubmit() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        platform.store_token("abc123");
        let ctl = controller(&backend, &platform);

        ctl.preview_selected_file(UploadFile::new("a.jpg", vec![1]));
        ctl.state().with_state_mut(|state| state.upload.in_flight = true);
        block_on(ctl.submit_upload());

        assert!(backend.calls().is_empty());
    }

    #[test]
    fn unreachable_upload_is_generic() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        platform.store_token("abc123");
        let ctl = controller(&backend, &platform);

        ctl.preview_selected_file(UploadFile::new("a.jpg", vec![1]));
        block_on(ctl.submit_upload());

        assert_eq!(snapshot(&ctl).upload.status.unwrap().message, UPLOAD_FAILED);
    }

    #[test]
    fn changing_kind_drops_the_file() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        ctl.preview_selected_file(UploadFile::new("a.png", b"abc".to_vec()));
        assert_eq!(
            snapshot(&ctl).upload.preview,
            Some(String::from("data:image/png;base64,YWJj"))
        );

        ctl.select_upload_kind(MediaKind::Video);

        let upload = snapshot(&ctl).upload;
        assert_eq!(upload.kind, MediaKind::Video);
        assert_eq!(upload.file, None);
        assert_eq!(upload.preview, None);
    }

    #[test]
    fn late_auth_check_keeps_a_fresh_login() {
        let (answer, gate) = oneshot::channel();
        let backend = MockBackend {
            auth_gate: RefCell::new(Some(gate)),
            login: Some(LoginResp {
                success: true,
                token: Some(String::from("t")),
            }),
            ..Default::default()
        };
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        // check-auth parks on the gate, the login completes, then the check
        // comes back negative
        block_on(join(ctl.initialize(), async {
            ctl.login("x@x.com", "right").await;
            answer.send(false).unwrap();
        }));

        let state = snapshot(&ctl);
        assert!(state.is_authenticated);
        assert_eq!(state.menu_label(), "Admin Panel");
        assert_eq!(state.screen, Screen::Admin);
        assert_eq!(platform.load_token(), Some(String::from("t")));
    }

    #[test]
    fn negative_auth_check_does_not_log_out() {
        let backend = MockBackend {
            authenticated: Some(false),
            ..Default::default()
        };
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);
        ctl.state().with_state_mut(|state| state.is_authenticated = true);

        block_on(ctl.initialize());

        assert!(snapshot(&ctl).is_authenticated);
    }

    #[test]
    fn hung_logout_still_leaves_the_admin_panel() {
        let backend = MockBackend {
            logout_hangs: true,
            ..Default::default()
        };
        let platform = MockPlatform::default();
        platform.store_token("abc123");
        let ctl = controller(&backend, &platform);
        ctl.state().with_state_mut(|state| {
            state.is_authenticated = true;
            state.screen = Screen::Admin;
        });

        assert!(ctl.logout().now_or_never().is_none());

        let state = snapshot(&ctl);
        assert!(!state.is_authenticated);
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.menu_label(), "Admin Login");
        assert_eq!(platform.load_token(), None);
        assert_eq!(*platform.scrolls.borrow(), 1);
        assert_eq!(backend.count("/api/logout"), 1);
    }

    #[test]
    fn upload_claims_the_button_before_sending() {
        let backend = MockBackend {
            upload_hangs: true,
            ..Default::default()
        };
        let platform = MockPlatform::default();
        platform.store_token("abc123");
        let ctl = controller(&backend, &platform);

        ctl.preview_selected_file(UploadFile::new("a.jpg", vec![1]));
        assert!(ctl.submit_upload().now_or_never().is_none());

        let upload = snapshot(&ctl).upload;
        assert!(upload.in_flight);
        assert_eq!(upload.status, Some(UploadStatus::info(UPLOADING)));

        // the first request is still pending, so this one must not go out
        block_on(ctl.submit_upload());
        assert_eq!(backend.count("/api/upload"), 1);
    }

    #[test]
    fn missing_token_does_not_claim_the_button() {
        let backend = MockBackend::default();
        let platform = MockPlatform::default();
        let ctl = controller(&backend, &platform);

        ctl.preview_selected_file(UploadFile::new("a.jpg", vec![1]));
        block_on(ctl.submit_upload());

        let upload = snapshot(&ctl).upload;
        assert!(!upload.in_flight);
        assert_eq!(upload.status, None);
        assert_eq!(*platform.alerts.borrow(), vec!["Please login again"]);
    }
}
