pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{blog_post, contact_submission, feature, health as health_handlers, page};
use crate::state::AppState;

/// Build the `/rpc` dispatch table.
///
/// Queries are `GET` (scalar input in the query string), mutations are
/// `POST` with a JSON body.
///
/// ```text
/// GET  /healthcheck                    status + timestamp
///
/// POST /createPage                     create page
/// GET  /getPages                       all pages
/// GET  /getPublishedPages              published pages
/// GET  /getPageBySlug?slug=            page or null
/// POST /updatePage                     partial update by id
///
/// POST /createBlogPost                 create post
/// GET  /getBlogPosts                   all posts, newest first
/// GET  /getPublishedBlogPosts          published, by published_at desc
/// GET  /getBlogPostBySlug?slug=        post or null
/// POST /updateBlogPost                 partial update by id
///
/// POST /createContactSubmission        new (unread) submission
/// GET  /getContactSubmissions          all, newest first
/// GET  /getUnreadContactSubmissions    unread, newest first
/// POST /markContactSubmissionAsRead    { id }
///
/// POST /createFeature                  create feature
/// GET  /getFeatures                    all, by sort_order then name
/// GET  /getActiveFeatures              active only
/// GET  /getHighlightedFeatures         highlighted and active
/// POST /updateFeature                  partial update by id
/// ```
pub fn rpc_routes() -> Router<AppState> {
    Router::new()
        .route("/healthcheck", get(health_handlers::healthcheck))
        // Pages.
        .route("/createPage", post(page::create_page))
        .route("/getPages", get(page::get_pages))
        .route("/getPublishedPages", get(page::get_published_pages))
        .route("/getPageBySlug", get(page::get_page_by_slug))
        .route("/updatePage", post(page::update_page))
        // Blog posts.
        .route("/createBlogPost", post(blog_post::create_blog_post))
        .route("/getBlogPosts", get(blog_post::get_blog_posts))
        .route(
            "/getPublishedBlogPosts",
            get(blog_post::get_published_blog_posts),
        )
        .route("/getBlogPostBySlug", get(blog_post::get_blog_post_by_slug))
        .route("/updateBlogPost", post(blog_post::update_blog_post))
        // Contact form.
        .route(
            "/createContactSubmission",
            post(contact_submission::create_contact_submission),
        )
        .route(
            "/getContactSubmissions",
            get(contact_submission::get_contact_submissions),
        )
        .route(
            "/getUnreadContactSubmissions",
            get(contact_submission::get_unread_contact_submissions),
        )
        .route(
            "/markContactSubmissionAsRead",
            post(contact_submission::mark_contact_submission_as_read),
        )
        // Features.
        .route("/createFeature", post(feature::create_feature))
        .route("/getFeatures", get(feature::get_features))
        .route("/getActiveFeatures", get(feature::get_active_features))
        .route(
            "/getHighlightedFeatures",
            get(feature::get_highlighted_features),
        )
        .route("/updateFeature", post(feature::update_feature))
}
