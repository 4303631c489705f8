//! Client helpers for patient endpoints. Ids are passed through as-is; the
//! backend validates them and enforces authorization.

use crate::{
    app_lib::{AppError, Fetcher, TokenSource, Transport},
    features::patients::types::PatientSummary,
};

pub async fn list_patients(
    api: &Fetcher<impl TokenSource, impl Transport>,
) -> Result<Vec<PatientSummary>, AppError> {
    api.get_json("/v1/patients/simple").await
}

/// Patients whose personal doctor is `doctor_id`.
pub async fn list_patients_of_doctor(
    api: &Fetcher<impl TokenSource, impl Transport>,
    doctor_id: &str,
) -> Result<Vec<PatientSummary>, AppError> {
    let doctor_id = required_id(doctor_id, "Doctor id")?;
    api.get_json(&format!("/v1/patients/simple/{doctor_id}/doctor"))
        .await
}

pub async fn list_patients_by_diagnose_code(
    api: &Fetcher<impl TokenSource, impl Transport>,
    code_id: &str,
) -> Result<Vec<PatientSummary>, AppError> {
    let code_id = required_id(code_id, "Diagnose code")?;
    api.get_json(&format!("/v1/patients/simple/{code_id}/diagnose-code"))
        .await
}

pub(crate) fn required_id<'a>(value: &'a str, label: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation(format!("{label} is required.")))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::test_support::{RecordingTransport, StaticToken};
    use futures::executor::block_on;
    use std::rc::Rc;

    #[test]
    fn doctor_patients_use_subject_in_path() {
        let transport = Rc::new(RecordingTransport::default());
        let api = Fetcher::new("http://api", StaticToken(Some("t")), transport.clone());

        block_on(list_patients_of_doctor(&api, " doc-1 ")).expect("list");

        assert_eq!(
            transport.requests.borrow()[0].url,
            "http://api/v1/patients/simple/doc-1/doctor"
        );
    }

    #[test]
    fn blank_ids_are_rejected_before_any_request() {
        let transport = Rc::new(RecordingTransport::default());
        let api = Fetcher::new("http://api", StaticToken(Some("t")), transport.clone());

        let err = block_on(list_patients_by_diagnose_code(&api, "  ")).expect_err("blank");

        assert_eq!(err, AppError::Validation("Diagnose code is required.".to_string()));
        assert!(transport.requests.borrow().is_empty());
    }
}
