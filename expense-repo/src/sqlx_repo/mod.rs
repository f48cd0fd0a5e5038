mod expense_repo;

use crate::expense_repo::ExpenseRepo;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, Pool, Postgres};
use std::sync::Arc;
use tracing::info;

const CREATE_EXPENSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id     SERIAL PRIMARY KEY,
    title  TEXT,
    amount NUMERIC,
    note   TEXT,
    tags   TEXT[]
)
"#;

pub struct SQLxRepo {
    pool: Pool<Postgres>,
}

impl SQLxRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

/// Creates the expenses table if it is missing. Safe to run on every startup.
pub async fn init_schema(pool: &Pool<Postgres>) -> Result<(), anyhow::Error> {
    query(CREATE_EXPENSES_TABLE)
        .execute(pool)
        .await
        .context("Unable to create expenses table")?;
    info!("expenses table ready");
    Ok(())
}

pub async fn create_repo(
    database_url: &str,
    max_pool_size: u32,
) -> Result<Arc<dyn ExpenseRepo>, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(database_url)
        .await
        .context("Unable to connect to database")?;

    init_schema(&pool).await?;

    Ok(Arc::new(SQLxRepo::new(pool)))
}
