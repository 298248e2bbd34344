//! Handlers for blog post operations.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::error::CoreError;
use cms_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use cms_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::query::SlugParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /rpc/createBlogPost
pub async fn create_blog_post(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::create(&state.pool, &input).await?;

    tracing::info!(
        blog_post_id = post.id,
        slug = %post.slug,
        is_published = post.is_published,
        "Blog post created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /rpc/getBlogPosts
///
/// All posts, drafts included, newest first.
pub async fn get_blog_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /rpc/getPublishedBlogPosts
///
/// Published posts ordered by `published_at`, most recent first.
pub async fn get_published_blog_posts(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /rpc/getBlogPostBySlug?slug=
pub async fn get_blog_post_by_slug(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SlugParams>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_slug(&state.pool, &params.slug).await?;
    Ok(Json(DataResponse { data: post }))
}

/// POST /rpc/updateBlogPost
pub async fn update_blog_post(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Blog post",
            id: input.id,
        }))?;

    tracing::info!(blog_post_id = post.id, "Blog post updated");

    Ok(Json(DataResponse { data: post }))
}
