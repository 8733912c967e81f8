pub mod quotes;

pub use quotes::{QuoteFilter, QuoteService};
