//! Repository for the `pages` table.

use cms_core::patch::TriState;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::{CreatePage, Page, UpdatePage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, content, meta_description, meta_keywords, \
                       is_published, created_at, updated_at";

/// Provides CRUD operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page, returning the created row.
    ///
    /// A duplicate slug fails with a unique violation on `uq_pages_slug`.
    pub async fn create(pool: &PgPool, input: &CreatePage) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (slug, title, content, meta_description, meta_keywords, is_published) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a page by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a page by exact, case-sensitive slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every page, published or not.
    pub async fn list(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY id");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// List only published pages.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE is_published = true ORDER BY id");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// Update a page. Only provided fields are applied; `updated_at` is
    /// always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, input: &UpdatePage) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET \
                slug             = COALESCE($2, slug), \
                title            = COALESCE($3, title), \
                content          = COALESCE($4, content), \
                meta_description = CASE WHEN $5 THEN $6 ELSE meta_description END, \
                meta_keywords    = CASE WHEN $7 THEN $8 ELSE meta_keywords END, \
                is_published     = COALESCE($9, is_published), \
                updated_at       = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(input.id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.meta_description.is_provided())
            .bind(input.meta_description.value())
            .bind(input.meta_keywords.is_provided())
            .bind(input.meta_keywords.value())
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }
}
