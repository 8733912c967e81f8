use crate::config::BasicConfig;
use crate::db::models::{NewQuote, Quote};
use crate::db::schema::SQLITE_INIT;
use crate::db::seed::SEED_QUOTES;
use crate::error::QuotesError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, QueryBuilder, Sqlite, SqliteConnection};
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Handle to the quotes table.
///
/// Every query checks a connection out of the pool for its own duration
/// only, so nothing is held between requests.
#[derive(Clone)]
pub struct QuoteStorage {
    pool: SqlitePool,
}

impl QuoteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file named by the config.
    pub async fn connect(cfg: &BasicConfig) -> Result<Self, QuotesError> {
        let connect_opts = SqliteConnectOptions::new()
            .filename(&cfg.db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections.max(1))
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), QuotesError> {
        // sqlx::query only runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Ensure the table exists and seed it when empty.
    ///
    /// Safe to run on every start. Returns the number of rows inserted,
    /// which is zero whenever the table already had data.
    pub async fn initialize(&self) -> Result<u64, QuotesError> {
        self.init_schema().await?;

        let mut tx = self.pool.begin().await?;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            tx.rollback().await?;
            info!(rows = count, "quotes table already populated; skipping seed");
            return Ok(0);
        }

        let rows: Vec<NewQuote<'_>> = SEED_QUOTES.iter().copied().map(NewQuote::from).collect();
        let inserted = Self::insert_all(&mut *tx, &rows).await?;
        tx.commit().await?;
        info!(rows = inserted, "seeded quotes table");
        Ok(inserted)
    }

    /// Insert `rows` in a single statement, in the given order.
    pub async fn seed(&self, rows: &[NewQuote<'_>]) -> Result<u64, QuotesError> {
        let mut conn = self.pool.acquire().await?;
        Self::insert_all(&mut *conn, rows).await
    }

    async fn insert_all(
        conn: &mut SqliteConnection,
        rows: &[NewQuote<'_>],
    ) -> Result<u64, QuotesError> {
        if rows.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("INSERT INTO quotes (text, author, category) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.text)
                .push_bind(row.author)
                .push_bind(row.category());
        });
        let result = builder.build().execute(conn).await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, QuotesError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// One page of quotes in id order, optionally restricted to a category.
    pub async fn list(
        &self,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Quote>, QuotesError> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, Quote>(
                    r#"SELECT id, text, author, category FROM quotes
                       WHERE category = ? ORDER BY id LIMIT ? OFFSET ?"#,
                )
                .bind(category)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Quote>(
                    r#"SELECT id, text, author, category FROM quotes
                       ORDER BY id LIMIT ? OFFSET ?"#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn list_all(&self) -> Result<Vec<Quote>, QuotesError> {
        let rows = sqlx::query_as::<_, Quote>(
            "SELECT id, text, author, category FROM quotes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Quote>, QuotesError> {
        let row = sqlx::query_as::<_, Quote>(
            "SELECT id, text, author, category FROM quotes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn categories(&self) -> Result<Vec<String>, QuotesError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT category FROM quotes ORDER BY category")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(category,)| category).collect())
    }
}
