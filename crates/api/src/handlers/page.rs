//! Handlers for page operations.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::error::CoreError;
use cms_db::models::page::{CreatePage, UpdatePage};
use cms_db::repositories::PageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::query::SlugParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /rpc/createPage
pub async fn create_page(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePage>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::create(&state.pool, &input).await?;

    tracing::info!(page_id = page.id, slug = %page.slug, "Page created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}

/// GET /rpc/getPages
pub async fn get_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// GET /rpc/getPublishedPages
pub async fn get_published_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// GET /rpc/getPageBySlug?slug=
///
/// An unknown slug is not an error: the response is `{ "data": null }`.
pub async fn get_page_by_slug(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SlugParams>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::find_by_slug(&state.pool, &params.slug).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /rpc/updatePage
pub async fn update_page(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: input.id,
        }))?;

    tracing::info!(page_id = page.id, "Page updated");

    Ok(Json(DataResponse { data: page }))
}
