pub mod quotes;

pub use quotes::{get_quote, health, list_categories, list_quotes, random_quote};
