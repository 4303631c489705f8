use crate::{
    features::{doctors::client, session::state::use_auth},
    routes::common::{DataTable, PageHeader, ROW_CLASS, TD_CLASS, empty_row, loaded},
};
use leptos::prelude::*;

const HEADERS: &[&str] = &["Doctor", "Patients"];

#[component]
pub fn DoctorsPatientCountPage() -> impl IntoView {
    let auth = use_auth();
    let counts = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        client::list_doctors_with_patient_count(&api).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Doctors with Patient Count" />
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        counts.get(),
                        |list| {
                            let rows = if list.is_empty() {
                                empty_row(HEADERS.len(), "No doctors found.")
                            } else {
                                list.into_iter()
                                    .map(|entry| {
                                        view! {
                                            <tr class=ROW_CLASS>
                                                <td class=TD_CLASS>{entry.doctor_name}</td>
                                                <td class=TD_CLASS>{entry.patient_count}</td>
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
