//! Landing page. Shows who is signed in and which areas their role opens up.

use crate::features::session::{Capability, Session, state::use_auth};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session
            .with(|session| format!("Welcome, {}", Session::username(session)))
    };
    let role_hint = move || {
        if auth.has(Capability::Doctor) {
            "Use the Patients, Doctors and My Appointments menus to manage your practice."
        } else if auth.has(Capability::Patient) {
            "Open My Appointments to review your visits, prescriptions and diagnoses."
        } else if auth.is_authenticated.get() {
            "Your account has no medical-record role yet."
        } else {
            "Sign in to access medical records."
        }
    };

    view! {
        <div class="mx-auto max-w-2xl py-12 text-center space-y-4">
            <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">{greeting}</h1>
            <p class="text-gray-500 dark:text-gray-400">{role_hint}</p>
        </div>
    }
}
