use crate::db::{Quote, QuoteStorage};
use crate::error::QuotesError;
use rand::seq::SliceRandom;
use serde::Serialize;

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 100;

/// Validated parameters for listing quotes.
///
/// Construct with [`QuoteFilter::new`]; the bounds are checked there so
/// the storage layer never sees an out-of-range page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteFilter {
    category: Option<String>,
    limit: i64,
    offset: i64,
}

impl Default for QuoteFilter {
    fn default() -> Self {
        Self {
            category: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl QuoteFilter {
    pub fn new(category: Option<String>, limit: i64, offset: i64) -> Result<Self, QuotesError> {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(QuotesError::InvalidQuery(format!(
                "limit must be between 1 and {MAX_LIMIT}, got {limit}"
            )));
        }
        if offset < 0 {
            return Err(QuotesError::InvalidQuery(format!(
                "offset must be non-negative, got {offset}"
            )));
        }
        // an empty `?category=` means no filter
        let category = category.filter(|c| !c.is_empty());
        Ok(Self {
            category,
            limit,
            offset,
        })
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub service: String,
}

/// Read operations over the quote store.
#[derive(Clone)]
pub struct QuoteService {
    storage: QuoteStorage,
    service_name: String,
}

impl QuoteService {
    pub fn new(storage: QuoteStorage, service_name: impl Into<String>) -> Self {
        Self {
            storage,
            service_name: service_name.into(),
        }
    }

    pub fn health(&self) -> Health {
        Health {
            status: "ok",
            service: self.service_name.clone(),
        }
    }

    pub async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>, QuotesError> {
        self.storage
            .list(filter.category(), filter.limit(), filter.offset())
            .await
    }

    /// Uniform pick over every stored quote; `None` when the store is empty.
    pub async fn random_quote(&self) -> Result<Option<Quote>, QuotesError> {
        let quotes = self.storage.list_all().await?;
        Ok(quotes.choose(&mut rand::thread_rng()).cloned())
    }

    pub async fn get_quote(&self, id: i64) -> Result<Option<Quote>, QuotesError> {
        self.storage.get_by_id(id).await
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, QuotesError> {
        self.storage.categories().await
    }
}
