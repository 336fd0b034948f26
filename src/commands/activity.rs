//! Activity Commands
//!
//! HTTP implementation of [`ActivityApi`] over the browser fetch API.

use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::ActivityApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{ActivityCollection, ApiErrorBody, ApiMessage};

/// Same set `encodeURIComponent` leaves unescaped
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ========================
// URL Building
// ========================

fn encode(component: &str) -> String {
    utf8_percent_encode(component, URI_COMPONENT).to_string()
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!("{}/activities/{}/signup?email={}", base, encode(activity), encode(email))
}

pub fn remove_url(base: &str, activity: &str, email: &str) -> String {
    format!("{}/activities/{}/remove?email={}", base, encode(activity), encode(email))
}

// ========================
// Response Parsing
// ========================

/// Interpret a list response
pub fn parse_collection(ok: bool, status: u16, body: &str) -> ApiResult<ActivityCollection> {
    if !ok {
        return Err(server_error(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

/// Interpret a signup/remove response
pub fn parse_outcome(ok: bool, status: u16, body: &str) -> ApiResult<ApiMessage> {
    if !ok {
        return Err(server_error(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

/// Non-2xx with a JSON body is an application failure; anything else failed to parse
fn server_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => ApiError::Server { status, detail: parsed.detail },
        Err(e) => e.into(),
    }
}

async fn read_body(resp: Response) -> ApiResult<(bool, u16, String)> {
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await?;
    Ok((ok, status, body))
}

// ========================
// Client
// ========================

#[derive(Debug, Clone, Default)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    pub fn new(base: &str) -> Self {
        Self { base: base.to_string() }
    }
}

impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> ApiResult<ActivityCollection> {
        let resp = Request::get(&activities_url(&self.base))
            .header("Accept", "application/json")
            .send()
            .await?;
        let (ok, status, body) = read_body(resp).await?;
        log::debug!("GET /activities -> {}", status);
        parse_collection(ok, status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<ApiMessage> {
        let resp = Request::post(&signup_url(&self.base, activity, email))
            .header("Accept", "application/json")
            .send()
            .await?;
        let (ok, status, body) = read_body(resp).await?;
        log::debug!("POST signup {} -> {}", activity, status);
        parse_outcome(ok, status, &body)
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> ApiResult<ApiMessage> {
        let resp = Request::delete(&remove_url(&self.base, activity, email))
            .header("Accept", "application/json")
            .send()
            .await?;
        let (ok, status, body) = read_body(resp).await?;
        log::debug!("DELETE remove {} -> {}", activity, status);
        parse_outcome(ok, status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_encode_like_encode_uri_component() {
        assert_eq!(
            signup_url("", "Chess Club", "a+b@x.com"),
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
        assert_eq!(
            remove_url("https://api.example", "Art & Craft/Design", "o'neil@x.com"),
            "https://api.example/activities/Art%20%26%20Craft%2FDesign/remove?email=o'neil%40x.com"
        );
        assert_eq!(activities_url(""), "/activities");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode("a-b_c.d!e~f*g(h)"), "a-b_c.d!e~f*g(h)");
        assert_eq!(encode("Café"), "Caf%C3%A9");
    }

    #[test]
    fn test_parse_outcome_success() {
        let msg = parse_outcome(true, 200, r#"{"message": "Signed up a@x.com for Chess Club"}"#).unwrap();
        assert_eq!(msg.message, "Signed up a@x.com for Chess Club");
    }

    #[test]
    fn test_parse_outcome_server_detail() {
        let err = parse_outcome(false, 400, r#"{"detail": "Already signed up"}"#).unwrap_err();
        assert!(!err.is_transport());
        assert_eq!(err.detail(), Some("Already signed up"));
    }

    #[test]
    fn test_parse_outcome_html_error_page_is_transport() {
        let err = parse_outcome(false, 502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_parse_outcome_json_error_without_detail() {
        let err = parse_outcome(false, 500, r#"{"error": "boom"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, detail: None }));
    }

    #[test]
    fn test_parse_outcome_success_with_garbage_is_decode_error() {
        let err = parse_outcome(true, 200, "not json").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_parse_collection() {
        let body = r#"{"Chess Club": {"description": "...", "schedule": "Mon 3pm", "max_participants": 10, "participants": ["a@x.com"]}}"#;
        let collection = parse_collection(true, 200, body).unwrap();
        assert_eq!(collection.len(), 1);

        assert!(parse_collection(true, 200, "oops").unwrap_err().is_transport());
        assert!(!parse_collection(false, 500, "{}").unwrap_err().is_transport());
        assert!(parse_collection(false, 503, "Service Unavailable").unwrap_err().is_transport());
    }
}
