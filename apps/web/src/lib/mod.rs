//! Shared frontend utilities: configuration, errors, the authenticated API
//! fetcher and its browser transport, view cancellation and build metadata.
//!
//! Every backend call goes through [`Fetcher`], which reads the bearer token from
//! the session at call time and joins paths onto the configured API base. Views
//! never build headers or hold the token. Callers must still avoid logging
//! response bodies that may carry patient data.

pub mod api;
pub mod build_info;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod cancel;
pub mod config;
pub mod errors;
pub mod telemetry;
#[cfg(target_arch = "wasm32")]
pub mod transport;

#[cfg(test)]
pub(crate) use api::test_support;
pub use api::{AuthenticatedRequest, Fetcher, Method, TokenSource, Transport, TransportResponse};
pub use cancel::CancelToken;
pub use config::AppConfig;
pub use errors::AppError;
#[cfg(target_arch = "wasm32")]
pub use transport::BrowserTransport;
