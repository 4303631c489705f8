//! One appointment with its diagnose and prescription, when present.

use crate::{
    components::{Alert, AlertKind},
    features::{
        appointments::{
            client,
            types::{AppointmentDetail, display_date},
        },
        session::state::use_auth,
    },
    routes::common::{DataTable, PageHeader, ROW_CLASS, TD_CLASS, empty_row, loaded},
};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

const MEDICINE_HEADERS: &[&str] = &["Medicine", "Description"];
const CARD_CLASS: &str = "rounded-lg border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800 space-y-2";

#[component]
pub fn AppointmentDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let detail = LocalResource::new(move || {
        let id = params.with(|params| params.get("id").unwrap_or_default());
        async move {
            let api = auth.fetcher()?;
            client::get_appointment_detail(&api, &id).await
        }
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Appointment Details" />
            <Suspense fallback=|| ()>
                {move || loaded(detail.get(), |detail| view! { <DetailCards detail=detail /> })}
            </Suspense>
        </div>
    }
}

#[component]
fn DetailCards(detail: AppointmentDetail) -> impl IntoView {
    let AppointmentDetail {
        appointment_date,
        patient,
        doctor,
        prescription,
        diagnose,
    } = detail;

    view! {
        <div class="grid gap-4 md:grid-cols-2">
            <div class=CARD_CLASS>
                <h2 class="font-semibold text-gray-900 dark:text-white">"Patient"</h2>
                <Field label="First Name" value=patient.first_name />
                <Field label="Last Name" value=patient.last_name />
            </div>
            <div class=CARD_CLASS>
                <h2 class="font-semibold text-gray-900 dark:text-white">"Doctor"</h2>
                <Field label="First Name" value=doctor.first_name />
                <Field label="Last Name" value=doctor.last_name />
            </div>
        </div>
        <div class=CARD_CLASS>
            <Field label="Date" value=display_date(&appointment_date) />
        </div>
        <div class=CARD_CLASS>
            <h2 class="font-semibold text-gray-900 dark:text-white">"Diagnose"</h2>
            {match diagnose {
                Some(diagnose) => view! {
                    <Field label="Description" value=diagnose.description />
                    <Field label="Code" value=diagnose.diagnose_code.code />
                }
                .into_any(),
                None => view! { <Alert kind=AlertKind::Info message="No diagnose recorded." /> }.into_any(),
            }}
        </div>
        <div class=CARD_CLASS>
            <h2 class="font-semibold text-gray-900 dark:text-white">"Prescription"</h2>
            {match prescription {
                Some(prescription) => {
                    let rows = if prescription.medicines.is_empty() {
                        empty_row(MEDICINE_HEADERS.len(), "No medicines attached.")
                    } else {
                        prescription
                            .medicines
                            .into_iter()
                            .map(|medicine| {
                                view! {
                                    <tr class=ROW_CLASS>
                                        <td class=TD_CLASS>{medicine.name}</td>
                                        <td class=TD_CLASS>{medicine.description}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    };
                    view! {
                        <Field label="Description" value=prescription.description />
                        <DataTable headers=MEDICINE_HEADERS>{rows}</DataTable>
                    }
                    .into_any()
                }
                None => {
                    view! { <Alert kind=AlertKind::Info message="No prescription issued." /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <p class="text-sm text-gray-700 dark:text-gray-300">
            <span class="font-medium">{label} ": "</span>
            {value}
        </p>
    }
}
