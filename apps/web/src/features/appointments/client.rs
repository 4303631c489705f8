use crate::{
    app_lib::{AppError, Fetcher, TokenSource, Transport},
    features::{
        appointments::types::{AppointmentDetail, AppointmentRequest, AppointmentSummary},
        patients::client::required_id,
    },
};

pub async fn list_doctor_appointments(
    api: &Fetcher<impl TokenSource, impl Transport>,
    doctor_id: &str,
) -> Result<Vec<AppointmentSummary>, AppError> {
    let doctor_id = required_id(doctor_id, "Doctor id")?;
    api.get_json(&format!("/v1/appointments/simple/{doctor_id}/doctor"))
        .await
}

pub async fn list_patient_appointments(
    api: &Fetcher<impl TokenSource, impl Transport>,
    patient_id: &str,
) -> Result<Vec<AppointmentSummary>, AppError> {
    let patient_id = required_id(patient_id, "Patient id")?;
    api.get_json(&format!("/v1/appointments/simple/{patient_id}/patient"))
        .await
}

pub async fn get_appointment_detail(
    api: &Fetcher<impl TokenSource, impl Transport>,
    appointment_id: &str,
) -> Result<AppointmentDetail, AppError> {
    let appointment_id = required_id(appointment_id, "Appointment id")?;
    api.get_json(&format!("/v1/appointments/detailed/{appointment_id}"))
        .await
}

pub async fn create_appointment(
    api: &Fetcher<impl TokenSource, impl Transport>,
    request: &AppointmentRequest,
) -> Result<(), AppError> {
    api.post_json_empty("/v1/appointments/create", request).await
}

pub async fn update_appointment(
    api: &Fetcher<impl TokenSource, impl Transport>,
    appointment_id: &str,
    request: &AppointmentRequest,
) -> Result<(), AppError> {
    let appointment_id = required_id(appointment_id, "Appointment id")?;
    api.put_json_empty(&format!("/v1/appointments/{appointment_id}/update"), request)
        .await
}

pub async fn delete_appointment(
    api: &Fetcher<impl TokenSource, impl Transport>,
    appointment_id: &str,
) -> Result<(), AppError> {
    let appointment_id = required_id(appointment_id, "Appointment id")?;
    api.delete(&format!("/v1/appointments/{appointment_id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::{
        Method,
        test_support::{RecordingTransport, StaticToken},
    };
    use futures::executor::block_on;
    use std::rc::Rc;

    fn api(transport: &Rc<RecordingTransport>) -> Fetcher<StaticToken, Rc<RecordingTransport>> {
        Fetcher::new("http://api", StaticToken(Some("t")), transport.clone())
    }

    #[test]
    fn update_and_delete_target_the_appointment() {
        let transport = Rc::new(RecordingTransport::default());
        let api = api(&transport);
        let request =
            AppointmentRequest::from_form("p-1", "d-1", "2024-03-01T09:30").expect("valid");

        block_on(update_appointment(&api, "a-1", &request)).expect("update");
        block_on(delete_appointment(&api, "a-1")).expect("delete");

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, "http://api/v1/appointments/a-1/update");
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].url, "http://api/v1/appointments/a-1");
    }

    #[test]
    fn patient_appointments_use_patient_path() {
        let transport = Rc::new(RecordingTransport::default());
        transport.respond(
            200,
            r#"[{"id":"a-1","appointmentDate":"2024-03-01T09:30:00",
                 "patient":{"id":"p-1","ucn":"1","firstName":"Ana","lastName":"P"},
                 "doctor":{"id":"d-1","firstName":"Boris","lastName":"I"}}]"#,
        );

        let appointments =
            block_on(list_patient_appointments(&api(&transport), "p-1")).expect("list");

        assert_eq!(appointments[0].display_date(), "2024-03-01 09:30");
        assert_eq!(
            transport.requests.borrow()[0].url,
            "http://api/v1/appointments/simple/p-1/patient"
        );
    }
}
