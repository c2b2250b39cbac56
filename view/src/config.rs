use api::upload::MAX_UPLOAD_BYTES;

// client configuration
//
// there is no config file on the client side; the webapp fills this in at
// compile time (see webapp/src/main.rs) and everything else uses Default.
// all of the strings are 'static so the whole struct is Copy and can ride
// along in event handlers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientConfig {
    // prefix in front of every backend endpoint
    pub api_prefix: &'static str,

    // the single admin account; the login form is pre-filled with it and a
    // password is mailed there whenever the form opens
    pub admin_email: &'static str,

    // local storage key for the session token, used verbatim; the value is
    // the raw token string
    pub token_key: &'static str,

    pub max_upload_bytes: u64,

    // pause between a successful upload and jumping to its gallery
    pub redirect_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_prefix: "/api",
            admin_email: "admin@example.com",
            token_key: "token",
            max_upload_bytes: MAX_UPLOAD_BYTES,
            redirect_delay_ms: 1500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.token_key, "token");
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.redirect_delay_ms, 1500);
    }
}
