//! Page entity model and DTOs.
//!
//! Pages are the static sections of the marketing site (home, pricing,
//! about, ...) addressed by a unique, case-sensitive slug.

use cms_core::patch::{double_option, non_null};
use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new page. `is_published` defaults to `false`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePage {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_published: Option<bool>,
}

/// DTO for updating a page. Only provided fields are written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePage {
    pub id: DbId,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub meta_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub meta_keywords: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_published: Option<bool>,
}
