use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    pub description: String,
    pub appointment_id: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PrescriptionCreated {
    pub id: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddMedicinesRequest {
    pub medicine_ids: Vec<String>,
}

/// Both halves of the create-then-attach flow, validated together.
#[derive(Clone, Debug, PartialEq)]
pub struct PrescriptionForm {
    pub prescription: CreatePrescriptionRequest,
    pub medicines: AddMedicinesRequest,
}

impl PrescriptionForm {
    pub fn new(
        appointment_id: &str,
        description: &str,
        medicine_ids: &[String],
    ) -> Result<Self, AppError> {
        let description = description.trim();
        if description.is_empty() || medicine_ids.is_empty() {
            return Err(AppError::Validation(
                "Please provide a description and select at least one medicine.".to_string(),
            ));
        }

        Ok(Self {
            prescription: CreatePrescriptionRequest {
                description: description.to_string(),
                appointment_id: appointment_id.to_string(),
            },
            medicines: AddMedicinesRequest {
                medicine_ids: medicine_ids.to_vec(),
            },
        })
    }
}

/// Adds `id` when absent and removes it otherwise; used by the medicine checkboxes.
pub fn toggle_selection(selected: &mut Vec<String>, id: &str) {
    if let Some(position) = selected.iter().position(|existing| existing == id) {
        selected.remove(position);
    } else {
        selected.push(id.to_string());
    }
}
