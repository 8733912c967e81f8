use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::{Config, CorsConfig};
use crate::db::QuoteStorage;
use crate::handlers;
use crate::middleware::cors_layer;
use crate::service::QuoteService;

#[derive(Clone)]
pub struct QuotesState {
    pub service: QuoteService,
    pub cors: CorsConfig,
}

impl QuotesState {
    pub fn new(storage: QuoteStorage, cfg: &Config) -> Self {
        Self {
            service: QuoteService::new(storage, cfg.basic.service_name.clone()),
            cors: cfg.cors.clone(),
        }
    }
}

pub fn quotes_router(state: QuotesState) -> Router {
    let cors = cors_layer(&state.cors);
    Router::new()
        .route("/", get(handlers::health))
        .route("/quotes", get(handlers::list_quotes))
        .route("/quotes/random", get(handlers::random_quote))
        .route("/quotes/{id}", get(handlers::get_quote))
        .route("/categories", get(handlers::list_categories))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
