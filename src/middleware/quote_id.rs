use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::QuotesError;

/// `{id}` path segment of `GET /quotes/{id}`.
///
/// A segment that is not an `i64` becomes `QuotesError::InvalidQuery`, so
/// it gets the same JSON error body as a bad list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteId(pub i64);

impl<S> FromRequestParts<S> for QuoteId
where
    S: Send + Sync,
{
    type Rejection = QuotesError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| QuotesError::InvalidQuery(rejection.body_text()))?;
        Ok(Self(id))
    }
}
