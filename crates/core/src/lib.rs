//! Shared domain building blocks for the content backend.
//!
//! Holds the primitive type aliases, the domain error type, boundary
//! validation helpers, and the tri-state field support used by partial
//! updates. Nothing in here touches the database or HTTP.

pub mod error;
pub mod patch;
pub mod types;
pub mod validation;
