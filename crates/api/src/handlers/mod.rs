//! Request handlers, one module per record type.
//!
//! Each handler validates its input through the extractors in
//! [`crate::extract`], delegates to the matching repository in `cms_db`, and
//! maps a missing row on a mutation to [`CoreError::NotFound`](cms_core::error::CoreError).

pub mod blog_post;
pub mod contact_submission;
pub mod feature;
pub mod health;
pub mod page;
