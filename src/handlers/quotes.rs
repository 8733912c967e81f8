use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::db::Quote;
use crate::error::{NotFoundBody, QuotesError};
use crate::middleware::{ListQuery, QuoteId};
use crate::router::QuotesState;
use crate::service::quotes::Health;

/// GET / -> service status; never touches storage.
pub async fn health(State(state): State<QuotesState>) -> Json<Health> {
    Json(state.service.health())
}

/// GET /quotes?category=&limit=&offset=
pub async fn list_quotes(
    State(state): State<QuotesState>,
    ListQuery(filter): ListQuery,
) -> Result<Json<Vec<Quote>>, QuotesError> {
    let quotes = state.service.list_quotes(&filter).await?;
    Ok(Json(quotes))
}

/// GET /quotes/random
pub async fn random_quote(State(state): State<QuotesState>) -> Result<Response, QuotesError> {
    let quote = state.service.random_quote().await?;
    Ok(quote_or(quote, NotFoundBody::NO_QUOTES))
}

/// GET /quotes/{id}
pub async fn get_quote(
    State(state): State<QuotesState>,
    QuoteId(id): QuoteId,
) -> Result<Response, QuotesError> {
    let quote = state.service.get_quote(id).await?;
    Ok(quote_or(quote, NotFoundBody::QUOTE))
}

/// GET /categories
pub async fn list_categories(
    State(state): State<QuotesState>,
) -> Result<Json<Vec<String>>, QuotesError> {
    let categories = state.service.list_categories().await?;
    Ok(Json(categories))
}

// Missing quotes are still a 200; the body carries the `error` field.
fn quote_or(quote: Option<Quote>, not_found: NotFoundBody) -> Response {
    match quote {
        Some(quote) => Json(quote).into_response(),
        None => Json(not_found).into_response(),
    }
}
