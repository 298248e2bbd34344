//! Handlers for contact form submissions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::error::CoreError;
use cms_db::models::contact_submission::CreateContactSubmission;
use cms_db::repositories::ContactSubmissionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::IdInput;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /rpc/createContactSubmission
///
/// The stored submission is always unread.
pub async fn create_contact_submission(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContactSubmission>,
) -> AppResult<impl IntoResponse> {
    let submission = ContactSubmissionRepo::create(&state.pool, &input).await?;

    tracing::info!(submission_id = submission.id, "Contact submission received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// GET /rpc/getContactSubmissions
pub async fn get_contact_submissions(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = ContactSubmissionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// GET /rpc/getUnreadContactSubmissions
pub async fn get_unread_contact_submissions(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = ContactSubmissionRepo::list_unread(&state.pool).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// POST /rpc/markContactSubmissionAsRead
pub async fn mark_contact_submission_as_read(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<IdInput>,
) -> AppResult<impl IntoResponse> {
    let submission = ContactSubmissionRepo::mark_read(&state.pool, input.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact submission",
            id: input.id,
        }))?;

    tracing::info!(submission_id = submission.id, "Contact submission marked as read");

    Ok(Json(DataResponse { data: submission }))
}
