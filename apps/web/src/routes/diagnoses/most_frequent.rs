use crate::{
    features::{diagnoses::client, session::state::use_auth},
    routes::common::{DataTable, PageHeader, ROW_CLASS, TD_CLASS, empty_row, loaded},
};
use leptos::prelude::*;

const HEADERS: &[&str] = &["Diagnose Code", "Diagnoses"];

#[component]
pub fn MostFrequentDiagnosesPage() -> impl IntoView {
    let auth = use_auth();
    let frequencies = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        client::most_frequent_diagnoses(&api).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Most Frequent Diagnoses" />
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        frequencies.get(),
                        |list| {
                            let rows = if list.is_empty() {
                                empty_row(HEADERS.len(), "No diagnoses recorded yet.")
                            } else {
                                list.into_iter()
                                    .map(|entry| {
                                        view! {
                                            <tr class=ROW_CLASS>
                                                <td class=TD_CLASS>{entry.diagnose_code}</td>
                                                <td class=TD_CLASS>{entry.diagnosis_count}</td>
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
