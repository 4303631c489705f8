use serde::{Deserialize, Serialize};

/// Minimal doctor reference embedded in patient and appointment payloads.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRef {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl DoctorRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: String,
    #[serde(default)]
    pub ucn: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_health_insured: bool,
    #[serde(default)]
    pub doctor: Option<DoctorRef>,
}

impl PatientSummary {
    pub fn insured_label(&self) -> &'static str {
        if self.is_health_insured { "Yes" } else { "No" }
    }

    /// Option label used by patient pickers: `UCN - First Last`.
    pub fn picker_label(&self) -> String {
        format!("{} - {} {}", self.ucn, self.first_name, self.last_name)
    }
}

/// Case-insensitive match on UCN, first name or last name. An empty query keeps all.
pub fn filter_patients(patients: &[PatientSummary], query: &str) -> Vec<PatientSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return patients.to_vec();
    }

    patients
        .iter()
        .filter(|patient| {
            [&patient.ucn, &patient.first_name, &patient.last_name]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// First eight characters of an id followed by an ellipsis, for dense tables.
pub fn short_id(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    format!("{prefix}...")
}
