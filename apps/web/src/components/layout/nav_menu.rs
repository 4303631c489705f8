//! Navbar entries built from the role-gated menu table. Groups open as simple
//! dropdowns; the active link is highlighted from the current location.

use crate::features::{
    navigation::{NavItem, NavLink, visible_menu},
    session::state::use_auth,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const LINK_CLASS: &str = "block py-2 px-3 rounded md:p-0 hover:text-blue-700 dark:hover:text-blue-500";

#[component]
pub fn NavMenu(#[prop(into)] on_navigate: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let items = Memo::new(move |_| {
        let authenticated = auth.is_authenticated.get();
        auth.capabilities
            .with(|capabilities| visible_menu(authenticated, capabilities))
    });

    move || {
        items
            .get()
            .into_iter()
            .map(|item| match item {
                NavItem::Link(link) => view! {
                    <li><MenuLink link=link on_navigate=on_navigate /></li>
                }
                .into_any(),
                NavItem::Group { title, links, .. } => view! {
                    <li><MenuGroup title=title links=links on_navigate=on_navigate /></li>
                }
                .into_any(),
            })
            .collect_view()
    }
}

#[component]
fn MenuGroup(
    title: &'static str,
    links: &'static [NavLink],
    on_navigate: Callback<()>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                type="button"
                class=LINK_CLASS
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {title}
                <span class="material-symbols-outlined align-middle text-base">"expand_more"</span>
            </button>
            <Show when=move || open.get()>
                <ul class="md:absolute z-40 mt-2 w-56 rounded-lg border border-gray-200 bg-white py-2 shadow-lg dark:border-gray-700 dark:bg-gray-800">
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <li class="px-4 py-1">
                                    <MenuLink
                                        link=*link
                                        on_navigate=Callback::new(move |_| {
                                            set_open.set(false);
                                            on_navigate.run(());
                                        })
                                    />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn MenuLink(link: NavLink, on_navigate: Callback<()>) -> impl IntoView {
    let pathname = use_location().pathname;
    let target = link.path;
    let active = move || pathname.with(|path| path == target);

    view! {
        <A
            href=link.path
            {..}
            class=LINK_CLASS
            class:text-blue-700=active
            class:text-gray-900=move || !active()
            class:dark:text-white=move || !active()
            on:click=move |_| on_navigate.run(())
        >
            {link.label}
        </A>
    }
}
