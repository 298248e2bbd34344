//! Scalar inputs shared by query and mutation operations.

use cms_core::types::DbId;
use serde::Deserialize;
use validator::Validate;

/// `?slug=` input for slug lookups. Matching is exact and case-sensitive,
/// so the value is passed through untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct SlugParams {
    pub slug: String,
}

/// `{ "id": n }` input for operations addressing a single row.
#[derive(Debug, Deserialize, Validate)]
pub struct IdInput {
    pub id: DbId,
}
