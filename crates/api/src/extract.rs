//! Extractors that validate input before a handler runs.
//!
//! Both reject with [`AppError`], so malformed or invalid input produces the
//! standard JSON error body and never reaches a repository.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use cms_core::error::CoreError;
use cms_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and passed its validation rules.
///
/// Type errors in the payload (missing fields, a string where an integer is
/// expected) are reported as validation failures; unreadable bodies (bad
/// syntax, wrong content type) as bad requests.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(err) => {
                    AppError::Core(CoreError::Validation(err.body_text()))
                }
                other => AppError::BadRequest(other.body_text()),
            })?;

        validate_input(&value)?;
        Ok(Self(value))
    }
}

/// Query string that has been deserialized and passed its validation rules.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;

        validate_input(&value)?;
        Ok(Self(value))
    }
}
