//! Route table. Every route renders inside the app shell behind the route gate,
//! which consults the navigation access rules before mounting a page.

mod appointments;
mod common;
mod diagnoses;
mod doctors;
mod health;
mod home;
mod not_found;
mod patients;

pub(crate) use appointments::{
    AppointmentDetailPage, DoctorAppointmentsPage, PatientAppointmentsPage,
};
pub(crate) use diagnoses::MostFrequentDiagnosesPage;
pub(crate) use doctors::{DoctorsPage, DoctorsPatientCountPage};
pub(crate) use health::HealthPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use patients::{
    AllPatientsPage, MyPatientsPage, PatientsByDiagnosePage, PatientsByDoctorPage,
};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/patients/my") view=MyPatientsPage />
            <Route path=path!("/patients/all") view=AllPatientsPage />
            <Route path=path!("/patients/diagnoses") view=PatientsByDiagnosePage />
            <Route path=path!("/patients/by-doctor") view=PatientsByDoctorPage />
            <Route path=path!("/doctors/all") view=DoctorsPage />
            <Route path=path!("/doctors/patient-count") view=DoctorsPatientCountPage />
            <Route path=path!("/diagnoses/most-frequent") view=MostFrequentDiagnosesPage />
            <Route path=path!("/appointments/by-doctor") view=DoctorAppointmentsPage />
            <Route path=path!("/appointments/patient") view=PatientAppointmentsPage />
            <Route path=path!("/appointments/detailed/:id") view=AppointmentDetailPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
