//! Handlers for marketing feature entries.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::error::CoreError;
use cms_db::models::feature::{CreateFeature, UpdateFeature};
use cms_db::repositories::FeatureRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /rpc/createFeature
pub async fn create_feature(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFeature>,
) -> AppResult<impl IntoResponse> {
    let feature = FeatureRepo::create(&state.pool, &input).await?;

    tracing::info!(feature_id = feature.id, name = %feature.name, "Feature created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: feature })))
}

/// GET /rpc/getFeatures
pub async fn get_features(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let features = FeatureRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: features }))
}

/// GET /rpc/getActiveFeatures
pub async fn get_active_features(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let features = FeatureRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: features }))
}

/// GET /rpc/getHighlightedFeatures
///
/// Highlighted entries that are also active.
pub async fn get_highlighted_features(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let features = FeatureRepo::list_highlighted(&state.pool).await?;
    Ok(Json(DataResponse { data: features }))
}

/// POST /rpc/updateFeature
pub async fn update_feature(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateFeature>,
) -> AppResult<impl IntoResponse> {
    let feature = FeatureRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feature",
            id: input.id,
        }))?;

    tracing::info!(feature_id = feature.id, "Feature updated");

    Ok(Json(DataResponse { data: feature }))
}
