//! Inline alert banners. Messages are rendered as text and must never include
//! tokens or raw response bodies beyond the sanitized error message.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Info,
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let (class, role) = match kind {
        AlertKind::Error => (
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200",
            "alert",
        ),
        AlertKind::Info => (
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200",
            "status",
        ),
    };

    view! { <div class=class role=role>{message}</div> }
}
