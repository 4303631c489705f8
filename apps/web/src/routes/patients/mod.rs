mod all;
mod by_diagnose;
mod by_doctor;
mod mine;

pub(crate) use all::AllPatientsPage;
pub(crate) use by_diagnose::PatientsByDiagnosePage;
pub(crate) use by_doctor::PatientsByDoctorPage;
pub(crate) use mine::MyPatientsPage;

use crate::{
    features::patients::types::PatientSummary,
    routes::common::{DataTable, ROW_CLASS, TD_CLASS, empty_row},
};
use leptos::prelude::*;

const HEADERS: &[&str] = &["UCN", "First Name", "Last Name", "Health Insured"];

/// Plain patient table shared by the filtered patient pages.
#[component]
fn PatientTable(patients: Vec<PatientSummary>) -> impl IntoView {
    let rows = if patients.is_empty() {
        empty_row(HEADERS.len(), "No patients found.")
    } else {
        patients
            .into_iter()
            .map(|patient| {
                view! {
                    <tr class=ROW_CLASS>
                        <td class=TD_CLASS>{patient.ucn.clone()}</td>
                        <td class=TD_CLASS>{patient.first_name.clone()}</td>
                        <td class=TD_CLASS>{patient.last_name.clone()}</td>
                        <td class=TD_CLASS>{patient.insured_label()}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! { <DataTable headers=HEADERS>{rows}</DataTable> }
}
