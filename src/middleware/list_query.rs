use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::QuotesError;
use crate::service::quotes::{DEFAULT_LIMIT, QuoteFilter};

#[derive(Debug, Deserialize)]
struct ListParams {
    category: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}

/// Query string of `GET /quotes`, validated into a [`QuoteFilter`].
///
/// Out-of-range or non-numeric `limit`/`offset` are rejected here, before
/// the handler runs.
#[derive(Debug, Clone)]
pub struct ListQuery(pub QuoteFilter);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = QuotesError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| QuotesError::InvalidQuery(rejection.body_text()))?;

        let filter = QuoteFilter::new(
            params.category,
            params.limit.unwrap_or(DEFAULT_LIMIT),
            params.offset.unwrap_or(0),
        )?;
        Ok(Self(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<QuoteFilter, QuotesError> {
        let (mut parts, _) = Request::builder()
            .uri(uri)
            .body(())
            .expect("build request")
            .into_parts();
        ListQuery::from_request_parts(&mut parts, &())
            .await
            .map(|ListQuery(filter)| filter)
    }

    #[tokio::test]
    async fn missing_params_use_defaults() {
        let filter = extract("/quotes").await.expect("defaults");
        assert_eq!(filter, QuoteFilter::default());
    }

    #[tokio::test]
    async fn params_are_parsed() {
        let filter = extract("/quotes?category=life&limit=5&offset=3")
            .await
            .expect("parsed");
        assert_eq!(filter.category(), Some("life"));
        assert_eq!(filter.limit(), 5);
        assert_eq!(filter.offset(), 3);
    }

    #[tokio::test]
    async fn bad_values_are_rejected() {
        for uri in [
            "/quotes?limit=0",
            "/quotes?limit=101",
            "/quotes?offset=-1",
            "/quotes?limit=ten",
        ] {
            assert!(
                matches!(extract(uri).await, Err(QuotesError::InvalidQuery(_))),
                "{uri} should be rejected"
            );
        }
    }
}
