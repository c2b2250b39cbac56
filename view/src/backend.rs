use async_trait::async_trait;

use api::{
    auth::{CheckAuthResp, ForgotPasswordReq, ForgotPasswordResp, LoginReq, LoginResp},
    category::Category,
    media::Tab,
    upload::{UploadForm, UploadResp},
};

// the remote half of the client
//
// everything is ?Send since the webapp runs on the single wasm thread
#[async_trait(?Send)]
pub trait Backend {
    async fn check_auth(&self) -> anyhow::Result<CheckAuthResp>;

    async fn media(&self, category: Category, tab: Tab) -> anyhow::Result<Vec<String>>;

    async fn login(&self, req: &LoginReq) -> anyhow::Result<LoginResp>;

    async fn forgot_password(&self, req: &ForgotPasswordReq) -> anyhow::Result<ForgotPasswordResp>;

    async fn logout(&self) -> anyhow::Result<()>;

    async fn upload(&self, token: &str, form: &UploadForm) -> anyhow::Result<UploadResp>;
}

// the browser half: durable storage, dialogs, scrolling, timers, playback
#[async_trait(?Send)]
pub trait Platform {
    fn load_token(&self) -> Option<String>;

    fn store_token(&self, token: &str);

    fn clear_token(&self);

    fn alert(&self, message: &str);

    fn scroll_to_top(&self);

    // stop whatever the lightbox is playing
    fn pause_media(&self);

    async fn sleep(&self, millis: u32);
}

// what a Platform reads back from storage; an empty value counts as no
// session at all
pub fn stored_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

#[async_trait(?Send)]
impl<T: Backend + ?Sized> Backend for &T {
    async fn check_auth(&self) -> anyhow::Result<CheckAuthResp> {
        (**self).check_auth().await
    }

    async fn media(&self, category: Category, tab: Tab) -> anyhow::Result<Vec<String>> {
        (**self).media(category, tab).await
    }

    async fn login(&self, req: &LoginReq) -> anyhow::Result<LoginResp> {
        (**self).login(req).await
    }

    async fn forgot_password(&self, req: &ForgotPasswordReq) -> anyhow::Result<ForgotPasswordResp> {
        (**self).forgot_password(req).await
    }

    async fn logout(&self) -> anyhow::Result<()> {
        (**self).logout().await
    }

    async fn upload(&self, token: &str, form: &UploadForm) -> anyhow::Result<UploadResp> {
        (**self).upload(token, form).await
    }
}

#[async_trait(?Send)]
impl<T: Platform + ?Sized> Platform for &T {
    fn load_token(&self) -> Option<String> {
        (**self).load_token()
    }

    fn store_token(&self, token: &str) {
        (**self).store_token(token)
    }

    fn clear_token(&self) {
        (**self).clear_token()
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn scroll_to_top(&self) {
        (**self).scroll_to_top()
    }

    fn pause_media(&self) {
        (**self).pause_media()
    }

    async fn sleep(&self, millis: u32) {
        (**self).sleep(millis).await
    }
}

// the real backend, over gloo-net
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    prefix: &'static str,
}

impl HttpBackend {
    pub fn new(prefix: &'static str) -> Self {
        HttpBackend { prefix }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn check_auth(&self) -> anyhow::Result<CheckAuthResp> {
        api::auth::check_auth(self.prefix).await
    }

    async fn media(&self, category: Category, tab: Tab) -> anyhow::Result<Vec<String>> {
        api::media::get_media(self.prefix, category, tab).await
    }

    async fn login(&self, req: &LoginReq) -> anyhow::Result<LoginResp> {
        api::auth::login(self.prefix, req).await
    }

    async fn forgot_password(&self, req: &ForgotPasswordReq) -> anyhow::Result<ForgotPasswordResp> {
        api::auth::forgot_password(self.prefix, req).await
    }

    async fn logout(&self) -> anyhow::Result<()> {
        api::auth::logout(self.prefix).await
    }

    async fn upload(&self, token: &str, form: &UploadForm) -> anyhow::Result<UploadResp> {
        api::upload::upload(self.prefix, token, form).await
    }
}
