pub mod auth;
pub mod category;
pub mod media;
pub mod upload;

// every call goes through a prefix supplied by the caller, so that the same
// bindings work against "/api" in production and a proxied prefix in dev
//
// the backend answers failures with a json body just like successes (i.e. a
// 401 from /login still carries {"success": false}), so the body is decoded
// regardless of the status code and only an undecodable body is an error
pub async fn decode<T>(resp: gloo_net::http::Response) -> anyhow::Result<T>
where
    T: for<'a> serde::Deserialize<'a>,
{
    let status = resp.status();
    let text = resp.text().await?;

    serde_json::from_str(&text).map_err(|err| {
        if (200..300).contains(&status) {
            anyhow::Error::msg(format!("malformed response body: {err}"))
        } else {
            anyhow::Error::msg(format!("status {status}: {text}"))
        }
    })
}

// json POST endpoints
//
// endpoint!(Login, "login") expands to
//
//   pub async fn login(prefix: &str, req: &LoginReq) -> anyhow::Result<LoginResp>
#[macro_export]
macro_rules! endpoint {
    ($name:ident, $path:literal) => {
        paste::paste! {
            pub async fn [<$name:snake>](prefix: &str, req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post(format!("{}/{}", prefix, $path).as_str())
                    .json(req)?
                    .send()
                    .await?;

                $crate::decode(resp).await
            }
        }
    };
}
