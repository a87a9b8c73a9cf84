//! JSON body extractor whose rejections go through [`ApiError`].

use crate::ApiError;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a missing content type, malformed JSON or a
/// mistyped field answers with a 400 `VALIDATION_ERROR` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiError::from)?;

        Ok(ApiJson(value))
    }
}
