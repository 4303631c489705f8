use crate::{
    components::{Alert, AlertKind, Button, Spinner},
    features::{
        navigation::{GateDecision, gate, route_access},
        session::{Session, state::use_auth},
    },
};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Renders `children` only when the current path is allowed for the session.
/// UX-only guard; the API enforces authorization on every call.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let phase = auth.session.with(Session::phase);
        let access = location.pathname.with(|path| route_access(path));
        auth.capabilities.with(|capabilities| gate(phase, access, capabilities))
    });

    move || match decision.get() {
        GateDecision::Allow => children().into_any(),
        GateDecision::Waiting => view! {
            <div class="flex justify-center py-16">
                <Spinner label="Signing in..." />
            </div>
        }
        .into_any(),
        GateDecision::SignIn => view! { <SignInPrompt /> }.into_any(),
        GateDecision::Forbidden => view! {
            <div class="mx-auto max-w-lg py-16">
                <Alert kind=AlertKind::Error message="You do not have access to this page." />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn SignInPrompt() -> impl IntoView {
    let auth = use_auth();
    let error = move || auth.error.get().map(|err| err.to_string());

    view! {
        <div class="mx-auto max-w-md py-16 text-center space-y-4">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">"Sign in required"</h2>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "Please sign in to view medical records."
            </p>
            {move || {
                error()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
            <Button on_click=Callback::new(move |_| auth.login())>"Login"</Button>
        </div>
    }
}
