//! # API crate: typed REST client for the canteen backend
//!
//! Every view in the `ui` crate talks to the backend through [`ApiClient`].
//! The client is cheap to clone (the underlying `reqwest::Client` is
//! reference counted) and carries the auth token of the current session.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`ApiError`] and the mapping from HTTP status / envelope to error variants |
//! | [`responses`] | Response envelopes (`{ success, message, ... }`) for each endpoint |
//! | `food` | Menu listing, search and today's special menu |
//! | `cart` | Server-side cart get / add / remove |
//! | `user` | Login, registration, profile, avatar upload, password reset |
//! | `order` | Order creation, lookup and history |
//! | `payment` | Payment intent creation and confirmation |
//! | `feedback` | General and per-order feedback |
//!
//! ## Conventions
//!
//! - Authenticated calls send the session token in a `token` header. Calling
//!   one without a token fails fast with [`ApiError::Unauthorized`].
//! - A body of `{ "success": false, "message": ... }` becomes
//!   [`ApiError::Rejected`], whatever the HTTP status.
//! - 401 and 404 are surfaced as their own variants so the tracker and the
//!   session loader can react to them.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod error;
pub mod responses;

mod cart;
mod feedback;
mod food;
mod order;
mod payment;
mod user;

pub use error::ApiError;
pub use responses::{Ack, AuthSession, PaymentIntent};

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "token";

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same backend, different session. Blank tokens are treated as none.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A request that carries the token when there is one.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.header(TOKEN_HEADER, token),
            None => builder,
        }
    }

    /// A request that must carry the token.
    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        if self.token.is_none() {
            return Err(ApiError::Unauthorized);
        }
        Ok(self.request(method, path))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// Map a raw status and body to the typed payload or an [`ApiError`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value: Option<Value> = serde_json::from_str(body).ok();
    let message = value
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string);

    match status {
        401 => return Err(ApiError::Unauthorized),
        404 => return Err(ApiError::NotFound),
        200..=299 => {}
        _ => {
            return Err(match message {
                Some(message) => ApiError::Rejected(message),
                None => ApiError::Status(status),
            })
        }
    }

    let Some(value) = value else {
        return Err(ApiError::Decode(format!("response is not JSON: {body:.80}")));
    };

    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Rejected(
            message.unwrap_or_else(|| "Request failed".to_string()),
        ));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn success_envelope_decodes() {
        let payload: Payload = decode_response(200, r#"{"success":true,"value":3}"#).unwrap();
        assert_eq!(payload, Payload { value: 3 });

        // Bare arrays have no envelope at all
        let list: Vec<u32> = decode_response(200, "[1,2]").unwrap();
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn failure_envelope_is_rejected() {
        let err = decode_response::<Payload>(200, r#"{"success":false,"message":"Item gone"}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref m) if m == "Item gone"));

        let err = decode_response::<Payload>(200, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn statuses_map_to_variants() {
        assert!(matches!(
            decode_response::<Payload>(401, "{}"),
            Err(ApiError::Unauthorized)
        ));
        assert!(matches!(
            decode_response::<Payload>(404, ""),
            Err(ApiError::NotFound)
        ));
        assert!(matches!(
            decode_response::<Payload>(400, r#"{"message":"Bad phone"}"#),
            Err(ApiError::Rejected(ref m)) if m == "Bad phone"
        ));
        assert!(matches!(
            decode_response::<Payload>(502, "<html>"),
            Err(ApiError::Status(502))
        ));
        assert!(matches!(
            decode_response::<Payload>(200, "<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn token_handling() {
        let client = ApiClient::new("http://localhost:4000/");
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert!(!client.is_authenticated());
        assert!(matches!(
            client.authed(Method::GET, "/api/user/profile"),
            Err(ApiError::Unauthorized)
        ));

        let client = client.with_token(Some("  ".to_string()));
        assert!(!client.is_authenticated());

        let client = client.with_token(Some("jwt".to_string()));
        assert_eq!(client.token(), Some("jwt"));
    }
}
