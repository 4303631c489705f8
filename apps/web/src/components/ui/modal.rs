//! Dialog frame used by every create/edit form. The caller owns the open state and
//! decides when to close; a failed save keeps the dialog open with its error.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm">
            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-lg overflow-hidden">
                <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700 flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                        {move || title.get()}
                    </h2>
                    <button
                        type="button"
                        on:click=move |_| on_close.run(())
                        class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                        aria-label="Close"
                    >
                        <span class="material-symbols-outlined">"close"</span>
                    </button>
                </div>
                <div class="p-6 space-y-4">{children()}</div>
            </div>
        </div>
    }
}

/// Shared input styling for modal forms.
pub const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

pub const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
