//! Every patient, with a client-side search box and the personal doctor's id.

use crate::{
    components::INPUT_CLASS,
    features::{
        patients::{
            client,
            types::{PatientSummary, filter_patients, short_id},
        },
        session::state::use_auth,
    },
    routes::common::{DataTable, PageHeader, ROW_CLASS, TD_CLASS, empty_row, loaded},
};
use leptos::prelude::*;

const HEADERS: &[&str] = &["UCN", "First Name", "Last Name", "Health Insured", "Doctor"];

#[component]
pub fn AllPatientsPage() -> impl IntoView {
    let auth = use_auth();
    let (query, set_query) = signal(String::new());
    let patients = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        client::list_patients(&api).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="All Patients">
                <input
                    type="search"
                    class=INPUT_CLASS
                    placeholder="Search by UCN or name"
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    prop:value=move || query.get()
                />
            </PageHeader>
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        patients.get(),
                        |list: Vec<PatientSummary>| {
                            let rows = move || {
                                let visible = query.with(|query| filter_patients(&list, query));
                                if visible.is_empty() {
                                    return empty_row(HEADERS.len(), "No patients match the search.");
                                }
                                visible
                                    .into_iter()
                                    .map(|patient| {
                                        let doctor = patient
                                            .doctor
                                            .as_ref()
                                            .map_or_else(|| "-".to_string(), |doctor| short_id(&doctor.id));
                                        view! {
                                            <tr class=ROW_CLASS>
                                                <td class=TD_CLASS>{patient.ucn.clone()}</td>
                                                <td class=TD_CLASS>{patient.first_name.clone()}</td>
                                                <td class=TD_CLASS>{patient.last_name.clone()}</td>
                                                <td class=TD_CLASS>{patient.insured_label()}</td>
                                                <td class=format!("{TD_CLASS} font-mono")>{doctor}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            };
                            view! { <DataTable headers=HEADERS>{rows}</DataTable> }
                        },
                    )
                }}
            </Suspense>
        </div>
    }
}
