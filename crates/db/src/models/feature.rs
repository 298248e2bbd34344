//! Feature entity model and DTOs.
//!
//! Features are listed by `sort_order` then `name`; `is_active` hides an
//! entry everywhere and `is_highlighted` promotes an active one.

use cms_core::patch::{double_option, non_null};
use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feature {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub is_highlighted: bool,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a feature. Omitted flags fall back to the column
/// defaults (`is_highlighted = false`, `sort_order = 0`, `is_active = true`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeature {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_highlighted: Option<bool>,
    #[serde(default, deserialize_with = "non_null")]
    pub sort_order: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_active: Option<bool>,
}

/// DTO for updating a feature. Only provided fields are written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeature {
    pub id: DbId,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_highlighted: Option<bool>,
    #[serde(default, deserialize_with = "non_null")]
    pub sort_order: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_leaves_omitted_flags_unset() {
        let input: CreateFeature = serde_json::from_value(serde_json::json!({
            "name": "Summaries",
            "description": "One-click summaries",
            "icon": null,
        }))
        .unwrap();
        assert_eq!(input.sort_order, None);
        assert_eq!(input.is_active, None);
        assert_eq!(input.is_highlighted, None);
    }

    #[test]
    fn fractional_sort_order_does_not_deserialize() {
        let result = serde_json::from_value::<CreateFeature>(serde_json::json!({
            "name": "Summaries",
            "description": "One-click summaries",
            "sort_order": 1.5,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_null_flags() {
        for field in ["sort_order", "is_active", "is_highlighted"] {
            let mut body = serde_json::json!({
                "name": "Summaries",
                "description": "One-click summaries",
            });
            body[field] = serde_json::Value::Null;
            let result = serde_json::from_value::<CreateFeature>(body);
            assert!(result.is_err(), "{field}: null was accepted");
        }
    }
}
