//! Shared layout wrapper with the navbar, user menu and content container. It
//! centralizes header markup and the mobile menu toggle so routes can focus on
//! content. Navigation remains client-side; the API enforces access control.

use super::nav_menu::NavMenu;
use crate::features::session::{Session, state::use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

const ACTION_CLASS: &str = "block w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-100 dark:text-gray-200 dark:hover:bg-gray-700";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let close_menu = Callback::new(move |_| set_menu_open.set(false));

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="material-symbols-outlined text-blue-600">"medical_services"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Medical Record"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:flex md:w-auto md:items-center md:gap-8"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 md:mt-0 md:flex-row md:space-x-8">
                            <NavMenu on_navigate=close_menu />
                        </ul>
                        <UserMenu />
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}

#[component]
fn UserMenu() -> impl IntoView {
    let auth = use_auth();
    let (open, set_open) = signal(false);
    let username = move || auth.session.with(|session| Session::username(session).to_string());

    view! {
        <div class="relative mt-4 md:mt-0">
            <button
                type="button"
                class="flex items-center gap-1 text-sm font-medium text-gray-900 dark:text-white"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <span class="material-symbols-outlined">"account_circle"</span>
                {username}
            </button>
            <Show when=move || open.get()>
                <div class="md:absolute right-0 z-40 mt-2 w-48 rounded-lg border border-gray-200 bg-white py-2 shadow-lg dark:border-gray-700 dark:bg-gray-800">
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=move || {
                            view! {
                                <button
                                    type="button"
                                    class=ACTION_CLASS
                                    on:click=move |_| {
                                        set_open.set(false);
                                        auth.login();
                                    }
                                >
                                    "Login"
                                </button>
                            }
                        }
                    >
                        <p class="px-4 py-1 text-xs text-gray-500 dark:text-gray-400">
                            {move || auth.capabilities.with(ToString::to_string)}
                        </p>
                        {move || {
                            auth.account_url()
                                .map(|href| {
                                    view! {
                                        <a class=ACTION_CLASS href=href>
                                            "Manage Account"
                                        </a>
                                    }
                                })
                        }}
                        <button
                            type="button"
                            class=ACTION_CLASS
                            on:click=move |_| {
                                set_open.set(false);
                                auth.logout();
                            }
                        >
                            "Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
