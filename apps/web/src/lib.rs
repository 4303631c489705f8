//! Medical-record web client: a Leptos single-page app over the medical-record
//! REST API, signed in through a Keycloak realm.
//!
//! The session store, role gate, authenticated fetcher and feature clients are
//! plain Rust and compile on every target so they can be tested natively. The
//! views, the browser transport and the identity-provider bindings only build for
//! `wasm32`.

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Loads configuration, installs logging and mounts the app on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use leptos::prelude::*;

    let config = app_lib::AppConfig::load();
    app_lib::telemetry::init(&config);
    tracing::info!(
        version = app_lib::build_info::version(),
        commit = app_lib::build_info::git_commit_hash(),
        api = %config.api_base_url,
        "starting medical-record web client"
    );

    mount_to_body(move || view! { <app::App config=config.clone() /> });
}
