//! Patients of a chosen personal doctor.

use super::PatientTable;
use crate::{
    components::{INPUT_CLASS, LABEL_CLASS},
    features::{
        doctors::{client as doctors, types::personal_doctors},
        patients::client,
        session::state::use_auth,
    },
    routes::common::{PageHeader, loaded},
};
use leptos::prelude::*;

#[component]
pub fn PatientsByDoctorPage() -> impl IntoView {
    let auth = use_auth();
    let (doctor_id, set_doctor_id) = signal(String::new());
    let doctor_list = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        doctors::list_doctors(&api).await.map(personal_doctors)
    });
    let patients = LocalResource::new(move || {
        let doctor_id = doctor_id.get();
        async move {
            if doctor_id.is_empty() {
                return Ok(None);
            }
            let api = auth.fetcher()?;
            client::list_patients_of_doctor(&api, &doctor_id)
                .await
                .map(Some)
        }
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Patients by Doctor" />
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        doctor_list.get(),
                        |list| {
                            view! {
                                <div class="max-w-sm">
                                    <label class=LABEL_CLASS for="personal-doctor">"Personal doctor"</label>
                                    <select
                                        id="personal-doctor"
                                        class=INPUT_CLASS
                                        on:change=move |ev| set_doctor_id.set(event_target_value(&ev))
                                        prop:value=move || doctor_id.get()
                                    >
                                        <option value="">"Select a doctor"</option>
                                        {list
                                            .into_iter()
                                            .map(|doctor| {
                                                let name = doctor.full_name();
                                                view! { <option value=doctor.id>{name}</option> }
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                            }
                        },
                    )
                }}
            </Suspense>
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        patients.get(),
                        |selected| selected.map(|list| view! { <PatientTable patients=list /> }),
                    )
                }}
            </Suspense>
        </div>
    }
}
