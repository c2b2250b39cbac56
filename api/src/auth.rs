use serde::{Deserialize, Serialize};

use crate::endpoint;

// messages

// ask whether the browser already holds a valid session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckAuthResp {
    #[serde(default)]
    pub authenticated: bool,
}

pub async fn check_auth(prefix: &str) -> anyhow::Result<CheckAuthResp> {
    let resp = gloo_net::http::Request::get(format!("{prefix}/check-auth").as_str())
        .send()
        .await?;

    crate::decode(resp).await
}

// exchange the admin credentials for a session token
//
// the login form collects an email, but the backend calls it a username
endpoint!(Login, "login");

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginReq {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResp {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
}

// have the backend email a (new) password to the admin address
endpoint!(ForgotPassword, "forgot-password");

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordReq {
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordResp {
    #[serde(default)]
    pub message: String,
}

// the response body is ignored
pub async fn logout(prefix: &str) -> anyhow::Result<()> {
    gloo_net::http::Request::get(format!("{prefix}/logout").as_str())
        .send()
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn failed_login_has_no_token() {
        let resp: LoginResp = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(resp, LoginResp::default());
    }

    #[test]
    fn login_request_uses_username() {
        let req = LoginReq {
            username: String::from("x@x.com"),
            password: String::from("wrong"),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"username":"x@x.com","password":"wrong"}"#
        );
    }

    #[test]
    fn check_auth_defaults_to_false() {
        let resp: CheckAuthResp = serde_json::from_str("{}").unwrap();
        assert!(!resp.authenticated);
    }
}
