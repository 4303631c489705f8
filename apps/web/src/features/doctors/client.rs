use crate::{
    app_lib::{AppError, Fetcher, TokenSource, Transport},
    features::doctors::types::{DoctorPatientCount, DoctorSummary},
};

pub async fn list_doctors(
    api: &Fetcher<impl TokenSource, impl Transport>,
) -> Result<Vec<DoctorSummary>, AppError> {
    api.get_json("/v1/doctors/simple").await
}

pub async fn list_doctors_with_patient_count(
    api: &Fetcher<impl TokenSource, impl Transport>,
) -> Result<Vec<DoctorPatientCount>, AppError> {
    api.get_json("/v1/doctors/simple/patient-count").await
}
