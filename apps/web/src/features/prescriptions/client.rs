//! Prescriptions are created in two calls: the prescription itself, then the
//! medicines attached to the id the backend returned.

use crate::{
    app_lib::{AppError, Fetcher, TokenSource, Transport},
    features::prescriptions::types::{Medicine, PrescriptionCreated, PrescriptionForm},
};

pub async fn list_medicines(
    api: &Fetcher<impl TokenSource, impl Transport>,
) -> Result<Vec<Medicine>, AppError> {
    api.get_json("/v1/medicines/simple").await
}

/// Creates the prescription and attaches its medicines. Succeeds only when both
/// calls do; a failed attach leaves the prescription without medicines.
pub async fn create_prescription_with_medicines(
    api: &Fetcher<impl TokenSource, impl Transport>,
    form: &PrescriptionForm,
) -> Result<String, AppError> {
    let created: PrescriptionCreated = api
        .post_json("/v1/prescriptions/create", &form.prescription)
        .await?;

    api.post_json_empty(
        &format!("/v1/prescriptions/{}/add-medicines", created.id),
        &form.medicines,
    )
    .await
    .inspect_err(|err| {
        tracing::warn!(prescription = %created.id, error = %err, "attaching medicines failed");
    })?;

    Ok(created.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::test_support::{RecordingTransport, StaticToken};
    use futures::executor::block_on;
    use std::rc::Rc;

    fn form() -> PrescriptionForm {
        PrescriptionForm::new("a-1", "rest", &["m-1".to_string(), "m-2".to_string()])
            .expect("valid")
    }

    #[test]
    fn attaches_medicines_to_the_created_prescription() {
        let transport = Rc::new(RecordingTransport::default());
        transport.respond(201, r#"{"id":"rx-9"}"#);
        transport.respond(200, "");
        let api = Fetcher::new("http://api", StaticToken(Some("t")), transport.clone());

        let id = block_on(create_prescription_with_medicines(&api, &form())).expect("created");

        assert_eq!(id, "rx-9");
        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].url, "http://api/v1/prescriptions/rx-9/add-medicines");
        assert_eq!(requests[1].body.as_deref(), Some(r#"{"medicineIds":["m-1","m-2"]}"#));
    }

    #[test]
    fn attach_failure_fails_the_whole_flow() {
        let transport = Rc::new(RecordingTransport::default());
        transport.respond(201, r#"{"id":"rx-9"}"#);
        transport.respond(500, "boom");
        let api = Fetcher::new("http://api", StaticToken(Some("t")), transport.clone());

        let err = block_on(create_prescription_with_medicines(&api, &form())).expect_err("fails");

        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn create_failure_skips_the_attach_call() {
        let transport = Rc::new(RecordingTransport::default());
        transport.respond(400, "bad");
        let api = Fetcher::new("http://api", StaticToken(Some("t")), transport.clone());

        assert!(block_on(create_prescription_with_medicines(&api, &form())).is_err());
        assert_eq!(transport.requests.borrow().len(), 1);
    }
}
