//! Building blocks shared by the list pages: header, table frame and the
//! loading/error/value switch every fetched view goes through.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Spinner},
};
use leptos::prelude::*;

pub(crate) const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";
pub(crate) const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white";
pub(crate) const ROW_CLASS: &str = "hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors";

#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-between gap-4">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
                {subtitle
                    .map(|text| {
                        view! { <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p> }
                    })}
            </div>
            {children.map(|children| children())}
        </div>
    }
}

#[component]
pub fn DataTable(headers: &'static [&'static str], children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        {headers
                            .iter()
                            .map(|header| view! { <th scope="col" class=TH_CLASS>{*header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">{children()}</tbody>
            </table>
        </div>
    }
}

pub(crate) fn empty_row(columns: usize, message: &'static str) -> AnyView {
    view! {
        <tr>
            <td
                colspan=columns.to_string()
                class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400"
            >
                {message}
            </td>
        </tr>
    }
    .into_any()
}

/// Spinner while pending, an inline alert on failure, `render` otherwise.
pub(crate) fn loaded<T, V>(
    result: Option<Result<T, AppError>>,
    render: impl FnOnce(T) -> V,
) -> AnyView
where
    V: IntoView + 'static,
{
    match result {
        None => view! {
            <div class="flex justify-center py-12">
                <Spinner />
            </div>
        }
        .into_any(),
        Some(Err(err)) => error_alert(&err),
        Some(Ok(value)) => render(value).into_any(),
    }
}

pub(crate) fn error_alert(err: &AppError) -> AnyView {
    if err.is_request_failure() {
        tracing::warn!(status = ?err.status(), error = %err, "request failed");
    }
    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
}
