use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseCode {
    pub id: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    pub diagnose_code: DiagnoseCode,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseFrequency {
    pub diagnose_code: String,
    pub diagnosis_count: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiagnoseRequest {
    pub appointment_id: String,
    pub diagnose_code_id: String,
    pub description: String,
}

impl CreateDiagnoseRequest {
    /// Validates the modal fields before anything is sent.
    pub fn from_form(
        appointment_id: &str,
        diagnose_code_id: &str,
        description: &str,
    ) -> Result<Self, AppError> {
        let code = diagnose_code_id.trim();
        let description = description.trim();
        if code.is_empty() || description.is_empty() {
            return Err(AppError::Validation(
                "Please provide both a code and description for the diagnose.".to_string(),
            ));
        }

        Ok(Self {
            appointment_id: appointment_id.to_string(),
            diagnose_code_id: code.to_string(),
            description: description.to_string(),
        })
    }
}

/// Distinct codes referenced by existing diagnoses, in first-seen order.
pub fn distinct_codes(diagnoses: &[DiagnoseSummary]) -> Vec<DiagnoseCode> {
    let mut seen = HashSet::new();
    diagnoses
        .iter()
        .filter(|diagnose| seen.insert(diagnose.diagnose_code.id.clone()))
        .map(|diagnose| diagnose.diagnose_code.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_codes_deduplicates_by_id() {
        let diagnoses: Vec<DiagnoseSummary> = serde_json::from_str(
            r#"[
                {"description":"flu","diagnoseCode":{"id":"c-1","code":"J10"}},
                {"description":"flu again","diagnoseCode":{"id":"c-1","code":"J10"}},
                {"description":"cold","diagnoseCode":{"id":"c-2","code":"J00"}}
            ]"#,
        )
        .expect("decode");

        let codes = distinct_codes(&diagnoses);

        assert_eq!(
            codes.iter().map(|code| code.code.as_str()).collect::<Vec<_>>(),
            vec!["J10", "J00"]
        );
    }

    #[test]
    fn diagnose_form_requires_code_and_description() {
        assert!(matches!(
            CreateDiagnoseRequest::from_form("a-1", "", "cough"),
            Err(AppError::Validation(_))
        ));
        assert!(CreateDiagnoseRequest::from_form("a-1", "c-1", "   ").is_err());

        let request = CreateDiagnoseRequest::from_form("a-1", "c-1", " cough ").expect("valid");
        assert_eq!(
            serde_json::to_value(&request).expect("encode"),
            serde_json::json!({
                "appointmentId": "a-1",
                "diagnoseCodeId": "c-1",
                "description": "cough"
            })
        );
    }
}
