use crate::{
    app_lib::AppError,
    features::{
        diagnoses::types::DiagnoseSummary,
        patients::types::{DoctorRef, PatientSummary},
        prescriptions::types::Medicine,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    pub id: String,
    #[serde(default)]
    pub appointment_date: String,
    pub patient: PatientSummary,
    pub doctor: DoctorRef,
}

impl AppointmentSummary {
    /// Date shown in tables: `YYYY-MM-DD HH:MM` when the value is an ISO timestamp.
    pub fn display_date(&self) -> String {
        display_date(&self.appointment_date)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDetail {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub medicines: Vec<Medicine>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetail {
    #[serde(default)]
    pub appointment_date: String,
    pub patient: PatientSummary,
    pub doctor: DoctorRef,
    #[serde(default)]
    pub prescription: Option<PrescriptionDetail>,
    #[serde(default)]
    pub diagnose: Option<DiagnoseSummary>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: String,
}

impl AppointmentRequest {
    /// Validates the appointment modal. `doctor_id` is the signed-in doctor's subject.
    pub fn from_form(
        patient_id: &str,
        doctor_id: &str,
        appointment_date: &str,
    ) -> Result<Self, AppError> {
        let patient_id = patient_id.trim();
        let appointment_date = appointment_date.trim();
        if patient_id.is_empty() || appointment_date.is_empty() {
            return Err(AppError::Validation("Please fill in all fields.".to_string()));
        }

        Ok(Self {
            patient_id: patient_id.to_string(),
            doctor_id: doctor_id.to_string(),
            appointment_date: appointment_date.to_string(),
        })
    }
}

/// `2024-03-01T09:30:00` becomes `2024-03-01 09:30`; anything else is returned as-is.
pub fn display_date(raw: &str) -> String {
    match split_minutes(raw) {
        Some((date, time)) => format!("{date} {time}"),
        None => raw.to_string(),
    }
}

/// Value for `<input type="datetime-local">`, which accepts minutes precision only.
pub fn input_date(raw: &str) -> String {
    match split_minutes(raw) {
        Some((date, time)) => format!("{date}T{time}"),
        None => raw.to_string(),
    }
}

fn split_minutes(raw: &str) -> Option<(&str, &str)> {
    let (date, time) = raw.split_once('T')?;
    Some((date, time.get(..5)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_form_requires_patient_and_date() {
        let err =
            AppointmentRequest::from_form("", "doc-1", "2024-03-01T09:30").expect_err("blank");
        assert_eq!(err.to_string(), "Please fill in all fields.");
        assert!(AppointmentRequest::from_form("p-1", "doc-1", " ").is_err());

        let request =
            AppointmentRequest::from_form("p-1", "doc-1", "2024-03-01T09:30").expect("valid");
        assert_eq!(
            serde_json::to_value(&request).expect("encode"),
            serde_json::json!({
                "patientId": "p-1",
                "doctorId": "doc-1",
                "appointmentDate": "2024-03-01T09:30"
            })
        );
    }

    #[test]
    fn detail_without_prescription_or_diagnose_decodes() {
        let detail: AppointmentDetail = serde_json::from_str(
            r#"{
                "appointmentDate": "2024-03-01T09:30:00",
                "patient": {"id":"p-1","firstName":"Ana","lastName":"P"},
                "doctor": {"id":"d-1","firstName":"Boris","lastName":"I"},
                "prescription": null
            }"#,
        )
        .expect("decode");

        assert!(detail.prescription.is_none());
        assert!(detail.diagnose.is_none());
        assert_eq!(detail.doctor.full_name(), "Boris I");
    }

    #[test]
    fn dates_are_trimmed_to_minutes() {
        assert_eq!(display_date("2024-03-01T09:30:00"), "2024-03-01 09:30");
        assert_eq!(input_date("2024-03-01T09:30:00.000"), "2024-03-01T09:30");
        assert_eq!(display_date("2024-03-01"), "2024-03-01");
    }
}
