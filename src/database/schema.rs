use crate::error::Result;
use sqlx::PgPool;

pub const CREATE_USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT, email TEXT)";

/// Creates the `users` table if it is missing. Safe to run on every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    tracing::info!("users table is ready");
    Ok(())
}
