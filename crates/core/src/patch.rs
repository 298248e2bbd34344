//! Tri-state fields for partial updates.
//!
//! Nullable columns in update DTOs are typed `Option<Option<T>>`:
//!
//! | JSON              | Rust             | Effect              |
//! |-------------------|------------------|---------------------|
//! | key absent        | `None`           | keep stored value   |
//! | `"field": null`   | `Some(None)`     | set column to NULL  |
//! | `"field": value`  | `Some(Some(v))`  | set column to `v`   |
//!
//! Plain serde collapses `null` into the outer `None`, so such fields must be
//! declared with `#[serde(default, deserialize_with = "double_option")]`.
//!
//! Optional fields backed by NOT NULL columns are single `Option<T>` declared
//! with `#[serde(default, deserialize_with = "non_null")]`: the key may be
//! omitted, but `null` is rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserialize a present field (possibly `null`) as `Some(inner)`.
///
/// Only invoked when the key exists; `#[serde(default)]` covers absence.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize a present field that must not be `null`.
///
/// Only invoked when the key exists; `#[serde(default)]` covers absence.
pub fn non_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom("null is not allowed")),
    }
}

/// Accessors for binding a tri-state field into a `CASE WHEN` update.
pub trait TriState<T> {
    /// Whether the caller supplied the field at all (a value or `null`).
    fn is_provided(&self) -> bool;

    /// The supplied value; `None` when absent or explicitly `null`.
    fn value(&self) -> Option<&T>;
}

impl<T> TriState<T> for Option<Option<T>> {
    fn is_provided(&self) -> bool {
        self.is_some()
    }

    fn value(&self) -> Option<&T> {
        self.as_ref().and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        note: Option<Option<String>>,
        #[serde(default, deserialize_with = "non_null")]
        title: Option<String>,
    }

    #[test]
    fn absent_key_is_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.note, None);
        assert!(!patch.note.is_provided());
    }

    #[test]
    fn explicit_null_is_some_none() {
        let patch: Patch = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(patch.note, Some(None));
        assert!(patch.note.is_provided());
        assert_eq!(patch.note.value(), None);
    }

    #[test]
    fn value_is_some_some() {
        let patch: Patch = serde_json::from_str(r#"{"note": "hello"}"#).unwrap();
        assert_eq!(patch.note.value().map(String::as_str), Some("hello"));
    }

    #[test]
    fn wrong_inner_type_is_rejected() {
        let result = serde_json::from_str::<Patch>(r#"{"note": 12}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_null_field_may_be_omitted() {
        let patch: Patch = serde_json::from_str(r#"{"title": "Home"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Home"));

        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.title, None);
    }

    #[test]
    fn non_null_field_rejects_null() {
        let err = serde_json::from_str::<Patch>(r#"{"title": null}"#).unwrap_err();
        assert!(err.to_string().contains("null is not allowed"));
    }
}
