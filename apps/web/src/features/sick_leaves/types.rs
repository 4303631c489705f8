use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSickLeaveRequest {
    pub reason: String,
    pub start_date: String,
    pub end_date: String,
    pub appointment_id: String,
}

impl CreateSickLeaveRequest {
    /// Dates come from `<input type="date">` (`YYYY-MM-DD`) and are forwarded as-is.
    pub fn from_form(
        appointment_id: &str,
        reason: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, AppError> {
        let reason = reason.trim();
        let start_date = start_date.trim();
        let end_date = end_date.trim();
        if reason.is_empty() || start_date.is_empty() || end_date.is_empty() {
            return Err(AppError::Validation(
                "Reason, start date and end date are required.".to_string(),
            ));
        }

        Ok(Self {
            reason: reason.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            appointment_id: appointment_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required() {
        assert!(CreateSickLeaveRequest::from_form("a-1", "", "2024-01-01", "2024-01-05").is_err());
        assert!(CreateSickLeaveRequest::from_form("a-1", "flu", "", "2024-01-05").is_err());
        assert!(CreateSickLeaveRequest::from_form("a-1", "flu", "2024-01-01", " ").is_err());
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let request = CreateSickLeaveRequest::from_form("a-1", "flu", "2024-01-01", "2024-01-05")
            .expect("ok");

        let value = serde_json::to_value(&request).expect("encode");

        assert_eq!(value["startDate"], "2024-01-01");
        assert_eq!(value["endDate"], "2024-01-05");
        assert_eq!(value["appointmentId"], "a-1");
    }
}
