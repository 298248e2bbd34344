//! Contact form submission model and DTOs.

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for a new contact form submission.
///
/// There is deliberately no `is_read` field: new submissions are always
/// unread, and an `is_read` key in the payload is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub company: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}
