//! Patients registered with the signed-in doctor.

use super::PatientTable;
use crate::{
    app_lib::AppError,
    features::{patients::client, session::state::use_auth},
    routes::common::{PageHeader, loaded},
};
use leptos::prelude::*;

#[component]
pub fn MyPatientsPage() -> impl IntoView {
    let auth = use_auth();
    let patients = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        let doctor_id = auth.subject().ok_or(AppError::Unauthenticated)?;
        client::list_patients_of_doctor(&api, &doctor_id).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="My Patients" subtitle="Patients who chose you as their personal doctor." />
            <Suspense fallback=|| ()>
                {move || loaded(patients.get(), |list| view! { <PatientTable patients=list /> })}
            </Suspense>
        </div>
    }
}
