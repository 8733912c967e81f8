use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category stored when an insert does not name one.
pub const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub category: String,
}

/// A quote that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewQuote<'a> {
    pub text: &'a str,
    pub author: &'a str,
    pub category: Option<&'a str>,
}

impl<'a> NewQuote<'a> {
    pub fn category(&self) -> &'a str {
        self.category.unwrap_or(DEFAULT_CATEGORY)
    }
}

impl<'a> From<(&'a str, &'a str, &'a str)> for NewQuote<'a> {
    fn from((text, author, category): (&'a str, &'a str, &'a str)) -> Self {
        Self {
            text,
            author,
            category: Some(category),
        }
    }
}
