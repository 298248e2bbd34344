//! Blog post entity model and DTOs.
//!
//! `is_published` and `published_at` are independent: neither is derived
//! from the other on create or update.

use cms_core::patch::{double_option, non_null};
use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: String,
    pub featured_image_url: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new blog post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlogPost {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(url)]
    pub featured_image_url: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_published: Option<bool>,
    pub published_at: Option<Timestamp>,
}

/// DTO for updating a blog post. Only provided fields are written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBlogPost {
    pub id: DbId,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub excerpt: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1))]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(url)]
    pub featured_image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub meta_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub meta_keywords: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_published: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub published_at: Option<Option<Timestamp>>,
}
