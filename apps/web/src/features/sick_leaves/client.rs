use crate::{
    app_lib::{AppError, Fetcher, TokenSource, Transport},
    features::sick_leaves::types::CreateSickLeaveRequest,
};

pub async fn create_sick_leave(
    api: &Fetcher<impl TokenSource, impl Transport>,
    request: &CreateSickLeaveRequest,
) -> Result<(), AppError> {
    api.post_json_empty("/v1/sick-leaves/create", request).await
}
