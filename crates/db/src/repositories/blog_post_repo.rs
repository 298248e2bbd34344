//! Repository for the `blog_posts` table.

use cms_core::patch::TriState;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, excerpt, content, author, featured_image_url, \
                       meta_description, meta_keywords, is_published, published_at, \
                       created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new blog post, returning the created row.
    ///
    /// `published_at` is stored exactly as supplied. A duplicate slug fails
    /// with a unique violation on `uq_blog_posts_slug`.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (slug, title, excerpt, content, author, featured_image_url, \
                                     meta_description, meta_keywords, is_published, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, false), $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.author)
            .bind(&input.featured_image_url)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(input.is_published)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Find a blog post by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a blog post by exact, case-sensitive slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all blog posts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// List published blog posts by `published_at`, most recent first.
    ///
    /// Published posts without a `published_at` are still returned, after
    /// the dated ones.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts \
             WHERE is_published = true \
             ORDER BY published_at DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Update a blog post. Only provided fields are applied; `updated_at` is
    /// always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                slug               = COALESCE($2, slug), \
                title              = COALESCE($3, title), \
                excerpt            = CASE WHEN $4 THEN $5 ELSE excerpt END, \
                content            = COALESCE($6, content), \
                author             = COALESCE($7, author), \
                featured_image_url = CASE WHEN $8 THEN $9 ELSE featured_image_url END, \
                meta_description   = CASE WHEN $10 THEN $11 ELSE meta_description END, \
                meta_keywords      = CASE WHEN $12 THEN $13 ELSE meta_keywords END, \
                is_published       = COALESCE($14, is_published), \
                published_at       = CASE WHEN $15 THEN $16 ELSE published_at END, \
                updated_at         = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(input.id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(input.excerpt.is_provided())
            .bind(input.excerpt.value())
            .bind(&input.content)
            .bind(&input.author)
            .bind(input.featured_image_url.is_provided())
            .bind(input.featured_image_url.value())
            .bind(input.meta_description.is_provided())
            .bind(input.meta_description.value())
            .bind(input.meta_keywords.is_provided())
            .bind(input.meta_keywords.value())
            .bind(input.is_published)
            .bind(input.published_at.is_provided())
            .bind(input.published_at.value())
            .fetch_optional(pool)
            .await
    }
}
