use crate::{
    app_lib::AppConfig,
    components::AppShell,
    features::session::{RouteGate, state::AuthProvider},
    routes::AppRoutes,
};
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    view! {
        <AuthProvider config=config>
            <Router>
                <AppShell>
                    <RouteGate>
                        <AppRoutes />
                    </RouteGate>
                </AppShell>
            </Router>
        </AuthProvider>
    }
}
