use crate::{
    app_lib::{AppError, Fetcher, TokenSource, Transport},
    features::diagnoses::types::{
        CreateDiagnoseRequest, DiagnoseCode, DiagnoseFrequency, DiagnoseSummary,
    },
};

pub async fn list_diagnoses(
    api: &Fetcher<impl TokenSource, impl Transport>,
) -> Result<Vec<DiagnoseSummary>, AppError> {
    api.get_json("/v1/diagnoses/simple").await
}

pub async fn list_diagnose_codes(
    api: &Fetcher<impl TokenSource, impl Transport>,
) -> Result<Vec<DiagnoseCode>, AppError> {
    api.get_json("/v1/diagnose-codes/simple").await
}

pub async fn most_frequent_diagnoses(
    api: &Fetcher<impl TokenSource, impl Transport>,
) -> Result<Vec<DiagnoseFrequency>, AppError> {
    api.get_json("/v1/diagnoses/most-frequent").await
}

pub async fn create_diagnose(
    api: &Fetcher<impl TokenSource, impl Transport>,
    request: &CreateDiagnoseRequest,
) -> Result<(), AppError> {
    api.post_json_empty("/v1/diagnoses/create", request).await
}
