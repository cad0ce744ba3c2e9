use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;

use crate::dtos::{ContactRequest, ContactResponse};
use crate::startup::AppState;

#[tracing::instrument(skip(state, request))]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let contact = state.submissions.submit(request).await?;

    Ok((StatusCode::CREATED, Json(contact)))
}
