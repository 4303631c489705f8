//! Authenticated fetcher for the medical-record JSON API. Every outbound call goes
//! through [`Fetcher`] so the base origin and the `Authorization: Bearer` header are
//! built by one rule; feature clients and routes never construct headers
//! themselves. Failures are returned once and never retried; the initiating view
//! decides what to show. Token material must never be logged.

use super::errors::AppError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use std::{fmt, rc::Rc};
use tracing::{debug, warn};

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One outbound call, built per request and dropped once it completes.
#[derive(Clone, PartialEq)]
pub struct AuthenticatedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub authorization: String,
}

// The header carries the bearer token, keep it out of debug output.
impl fmt::Debug for AuthenticatedRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthenticatedRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body", &self.body)
            .field("authorization", &"Bearer [REDACTED]")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the actual HTTP exchange. The browser implementation lives in
/// `transport.rs`; tests substitute recording fakes.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &AuthenticatedRequest) -> Result<TransportResponse, AppError>;
}

impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: &AuthenticatedRequest) -> Result<TransportResponse, AppError> {
        (**self).send(request).await
    }
}

/// Source of the bearer token at call time, usually the session store.
pub trait TokenSource {
    fn current_token(&self) -> Result<SecretString, AppError>;
}

impl<S: TokenSource + ?Sized> TokenSource for Rc<S> {
    fn current_token(&self) -> Result<SecretString, AppError> {
        (**self).current_token()
    }
}

/// Uniform, authenticated access to the backend API.
pub struct Fetcher<S, T> {
    base_url: String,
    session: S,
    transport: T,
}

impl<S: TokenSource, T: Transport> Fetcher<S, T> {
    pub fn new(base_url: impl Into<String>, session: S, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport,
        }
    }

    /// Builds the request for `path`, reading the token at call time.
    /// Fails with `Unauthenticated` instead of emitting a header-less request.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<AuthenticatedRequest, AppError> {
        let token = self.session.current_token()?;
        Ok(AuthenticatedRequest {
            method,
            url: build_url_with_base(&self.base_url, path),
            body,
            authorization: bearer_header(&token),
        })
    }

    /// Sends one request and maps transport errors and non-2xx statuses to `AppError`.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<TransportResponse, AppError> {
        let request = self.request(method, path, body)?;
        debug!(method = %request.method, url = %request.url, "sending api request");

        let response = self.transport.send(&request).await.inspect_err(|err| {
            warn!(method = %request.method, url = %request.url, error = %err, "api request failed");
        })?;

        if response.ok() {
            Ok(response)
        } else {
            warn!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                "api request rejected"
            );
            Err(AppError::Http {
                status: response.status,
                message: sanitize_body(&response.body),
            })
        }
    }

    /// Fetches and decodes JSON.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let response = self.send(Method::Get, path, None).await?;
        decode_json(&response)
    }

    /// Posts JSON and decodes the JSON response.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let response = self.send(Method::Post, path, Some(encode_json(body)?)).await?;
        decode_json(&response)
    }

    /// Posts JSON and ignores whatever the server returns on success.
    pub async fn post_json_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        self.send(Method::Post, path, Some(encode_json(body)?))
            .await
            .map(|_| ())
    }

    /// Puts JSON and ignores whatever the server returns on success.
    pub async fn put_json_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        self.send(Method::Put, path, Some(encode_json(body)?))
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }
}

fn bearer_header(token: &SecretString) -> String {
    format!("Bearer {}", token.expose_secret())
}

fn encode_json<B: Serialize>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

fn decode_json<R: DeserializeOwned>(response: &TransportResponse) -> Result<R, AppError> {
    serde_json::from_str(&response.body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
