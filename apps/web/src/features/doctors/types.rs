use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_personal_doctor: bool,
}

impl DoctorSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPatientCount {
    pub doctor_name: String,
    pub patient_count: u64,
}

/// Only personal doctors can have registered patients.
pub fn personal_doctors(doctors: Vec<DoctorSummary>) -> Vec<DoctorSummary> {
    doctors
        .into_iter()
        .filter(|doctor| doctor.is_personal_doctor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_personal_doctors() {
        let doctors: Vec<DoctorSummary> = serde_json::from_str(
            r#"[
                {"id":"d-1","firstName":"Ana","lastName":"Ivanova","isPersonalDoctor":true},
                {"id":"d-2","firstName":"Boris","lastName":"Petrov","isPersonalDoctor":false}
            ]"#,
        )
        .expect("decode");

        let personal = personal_doctors(doctors);

        assert_eq!(personal.len(), 1);
        assert_eq!(personal[0].full_name(), "Ana Ivanova");
    }
}
