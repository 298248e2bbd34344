//! Repository for the `features` table.

use cms_core::patch::TriState;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::feature::{CreateFeature, Feature, UpdateFeature};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, icon, is_highlighted, sort_order, is_active, \
                       created_at, updated_at";

/// Provides CRUD operations for features.
pub struct FeatureRepo;

impl FeatureRepo {
    /// Insert a new feature, applying column defaults for omitted flags.
    pub async fn create(pool: &PgPool, input: &CreateFeature) -> Result<Feature, sqlx::Error> {
        let query = format!(
            "INSERT INTO features (name, description, icon, is_highlighted, sort_order, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, false), COALESCE($5, 0), COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.is_highlighted)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a feature by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features WHERE id = $1");
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all features. Ordered by sort_order, then name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features ORDER BY sort_order, name");
        sqlx::query_as::<_, Feature>(&query).fetch_all(pool).await
    }

    /// List active features. Ordered by sort_order, then name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM features WHERE is_active = true ORDER BY sort_order, name"
        );
        sqlx::query_as::<_, Feature>(&query).fetch_all(pool).await
    }

    /// List features that are both highlighted and active.
    /// Ordered by sort_order, then name.
    pub async fn list_highlighted(pool: &PgPool) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM features \
             WHERE is_highlighted = true AND is_active = true \
             ORDER BY sort_order, name"
        );
        sqlx::query_as::<_, Feature>(&query).fetch_all(pool).await
    }

    /// Update a feature. Only provided fields are applied; `updated_at` is
    /// always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateFeature,
    ) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!(
            "UPDATE features SET \
                name           = COALESCE($2, name), \
                description    = COALESCE($3, description), \
                icon           = CASE WHEN $4 THEN $5 ELSE icon END, \
                is_highlighted = COALESCE($6, is_highlighted), \
                sort_order     = COALESCE($7, sort_order), \
                is_active      = COALESCE($8, is_active), \
                updated_at     = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.icon.is_provided())
            .bind(input.icon.value())
            .bind(input.is_highlighted)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
