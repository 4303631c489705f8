//! Appointments of the signed-in patient, each linking to its detail page.

use crate::{
    app_lib::AppError,
    features::{appointments::client, navigation::paths, session::state::use_auth},
    routes::common::{DataTable, PageHeader, ROW_CLASS, TD_CLASS, empty_row, loaded},
};
use leptos::prelude::*;
use leptos_router::components::A;

const HEADERS: &[&str] = &["UCN", "First Name", "Last Name", "Doctor", "Appointment Date", ""];

#[component]
pub fn PatientAppointmentsPage() -> impl IntoView {
    let auth = use_auth();
    let appointments = LocalResource::new(move || async move {
        let api = auth.fetcher()?;
        let patient_id = auth.subject().ok_or(AppError::Unauthenticated)?;
        client::list_patient_appointments(&api, &patient_id).await
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="My Appointments" />
            <Suspense fallback=|| ()>
                {move || {
                    loaded(
                        appointments.get(),
                        |list| {
                            let rows = if list.is_empty() {
                                empty_row(HEADERS.len(), "You have no appointments.")
                            } else {
                                view! {
                                    <For
                                        each=move || list.clone()
                                        key=|appointment| appointment.id.clone()
                                        children=|appointment| {
                                            let date = appointment.display_date();
                                            view! {
                                                <tr class=ROW_CLASS>
                                                    <td class=TD_CLASS>{appointment.patient.ucn}</td>
                                                    <td class=TD_CLASS>{appointment.patient.first_name}</td>
                                                    <td class=TD_CLASS>{appointment.patient.last_name}</td>
                                                    <td class=TD_CLASS>{appointment.doctor.last_name}</td>
                                                    <td class=TD_CLASS>{date}</td>
                                                    <td class=TD_CLASS>
                                                        <A
                                                            href=paths::appointment_detail(&appointment.id)
                                                            {..}
                                                            class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                                                        >
                                                            "View Details"
                                                        </A>
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
