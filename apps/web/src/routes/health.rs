use crate::app_lib::build_info;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let rows = [
        ("Version", build_info::version()),
        ("Commit", build_info::git_commit_hash()),
        ("Target", build_info::target()),
    ];

    view! {
        <div class="flex justify-center">
            <div class="block w-full max-w-[38rem] rounded-lg border border-neutral-200 bg-white dark:border-neutral-300 dark:bg-neutral-600">
                <div class="border-b-2 border-[#0000002d] px-6 py-3 text-neutral-600 dark:text-neutral-50 font-semibold">
                    "Build Version"
                </div>
                <dl class="p-6 grid grid-cols-3 gap-2 text-base text-black dark:text-neutral-50">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt class="font-medium">{label}</dt>
                                <dd class="col-span-2 font-mono">{value}</dd>
                            }
                        })
                        .collect_view()}
                </dl>
            </div>
        </div>
    }
}
