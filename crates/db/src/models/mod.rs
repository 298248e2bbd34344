//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO carrying the target `id` and
//!   optional fields for patches (see [`cms_core::patch`] for nullable columns)

pub mod blog_post;
pub mod contact_submission;
pub mod feature;
pub mod page;
