//! Browser transport backed by `fetch` through `gloo-net`. Every request is bounded
//! by an abort timeout so a stalled backend surfaces as an error instead of a
//! spinner that never ends.

use super::{
    api::{AuthenticatedRequest, Method, Transport, TransportResponse},
    errors::AppError,
};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

/// Default request timeout (milliseconds).
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug)]
pub struct BrowserTransport {
    timeout_ms: u32,
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: &AuthenticatedRequest) -> Result<TransportResponse, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(self.timeout_ms, move || timeout_controller.abort());

        let response = build_request(request, &controller.signal())?
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        // Error bodies are best-effort; an unreadable body still yields the status.
        let body = response.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }
}

fn build_request(
    request: &AuthenticatedRequest,
    signal: &AbortSignal,
) -> Result<Request, AppError> {
    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    let builder: RequestBuilder = builder
        .header("Authorization", &request.authorization)
        .header("Accept", "application/json")
        .abort_signal(Some(signal));

    let built = match &request.body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body.as_str()),
        None => builder.build(),
    };
    built.map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}
