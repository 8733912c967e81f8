//! Database module: models, schema and seed data for the quotes table.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `seed.rs`: the built-in quotations inserted on first start
//! - `sqlite.rs`: pool setup, initialization and queries

pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use models::{NewQuote, Quote};
pub use schema::SQLITE_INIT;
pub use sqlite::{QuoteStorage, SqlitePool};
