pub mod cors;
pub mod list_query;
pub mod quote_id;

pub use cors::cors_layer;
pub use list_query::ListQuery;
pub use quote_id::QuoteId;
