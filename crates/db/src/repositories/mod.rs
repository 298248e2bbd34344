//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Updates are a single
//! `UPDATE ... WHERE id = $1 RETURNING` statement; `Ok(None)` means no row
//! had that id.

pub mod blog_post_repo;
pub mod contact_submission_repo;
pub mod feature_repo;
pub mod page_repo;

pub use blog_post_repo::BlogPostRepo;
pub use contact_submission_repo::ContactSubmissionRepo;
pub use feature_repo::FeatureRepo;
pub use page_repo::PageRepo;
