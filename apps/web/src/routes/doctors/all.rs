use crate::{
    features::{doctors::client, session::state::use_auth},
    routes::common::{DataTable, PageHeader, ROW_CLASS, TD_CLASS, empty_row, loaded},
};
use leptos::prelude::*;

const HEADERS: &[&str] = &["First Name", "Last Name", "Personal Doctor"];

#[component]
pub fn DoctorsPage() -> impl IntoView {
    let auth = use_auth();
    let doctors = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        client::list_doctors(&api).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Doctors" />
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        doctors.get(),
                        |list| {
                            let rows = if list.is_empty() {
                                empty_row(HEADERS.len(), "No doctors found.")
                            } else {
                                view! {
                                    <For
                                        each=move || list.clone()
                                        key=|doctor| doctor.id.clone()
                                        children=|doctor| {
                                            view! {
                                                <tr class=ROW_CLASS>
                                                    <td class=TD_CLASS>{doctor.first_name}</td>
                                                    <td class=TD_CLASS>{doctor.last_name}</td>
                                                    <td class=TD_CLASS>
                                                        {if doctor.is_personal_doctor { "Yes" } else { "No" }}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                }
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
