//! Repository for the `contact_submissions` table.

use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_submission::{ContactSubmission, CreateContactSubmission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, company, message, is_read, created_at";

/// Provides create, list and read-state operations for contact submissions.
pub struct ContactSubmissionRepo;

impl ContactSubmissionRepo {
    /// Insert a new submission. It is always stored unread; an empty
    /// `company` is stored as NULL.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions (name, email, company, message, is_read) \
             VALUES ($1, $2, NULLIF($3, ''), $4, false) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// List unread submissions, newest first.
    pub async fn list_unread(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions \
             WHERE is_read = false \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Mark a submission as read. Idempotent for already-read rows.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions SET is_read = true WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
