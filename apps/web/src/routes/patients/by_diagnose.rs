//! Patients diagnosed with a chosen code. The selector lists each code that
//! appears in at least one diagnose.

use super::PatientTable;
use crate::{
    components::{INPUT_CLASS, LABEL_CLASS},
    features::{
        diagnoses::{client as diagnoses, types::distinct_codes},
        patients::client,
        session::state::use_auth,
    },
    routes::common::{PageHeader, loaded},
};
use leptos::prelude::*;

#[component]
pub fn PatientsByDiagnosePage() -> impl IntoView {
    let auth = use_auth();
    let (code_id, set_code_id) = signal(String::new());
    let codes = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        diagnoses::list_diagnoses(&api)
            .await
            .map(|list| distinct_codes(&list))
    });
    let patients = LocalResource::new(move || {
        let code_id = code_id.get();
        async move {
            if code_id.is_empty() {
                return Ok(None);
            }
            let api = auth.fetcher()?;
            client::list_patients_by_diagnose_code(&api, &code_id)
                .await
                .map(Some)
        }
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Patients by Diagnose" />
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        codes.get(),
                        |codes| {
                            view! {
                                <div class="max-w-sm">
                                    <label class=LABEL_CLASS for="diagnose-code">"Diagnose code"</label>
                                    <select
                                        id="diagnose-code"
                                        class=INPUT_CLASS
                                        on:change=move |ev| set_code_id.set(event_target_value(&ev))
                                        prop:value=move || code_id.get()
                                    >
                                        <option value="">"Select a diagnose code"</option>
                                        {codes
                                            .into_iter()
                                            .map(|code| view! { <option value=code.id>{code.code}</option> })
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
