//! SQL DDL for initializing the quote storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are never reused
/// - `category` falling back to `general` when omitted
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    author TEXT NOT NULL,
    category TEXT NOT NULL DEFAULT 'general'
);

CREATE INDEX IF NOT EXISTS idx_quotes_category ON quotes(category);
"#;
