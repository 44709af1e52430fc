use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};
use crate::models::user::User;

/// Access to the `users` table.
///
/// Ids arrive exactly as they appeared in the request path and are handed to
/// the database without any parsing, so a malformed id fails the same way a
/// malformed query would.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Fails with `NotFound` when no row has this id.
    async fn get_user(&self, id: &str) -> StoreResult<User>;

    async fn create_user(&self, name: &str, email: &str) -> StoreResult<User>;

    /// Overwrites name and email, then re-reads the row. A missing id
    /// surfaces as a `Query` failure from the re-read.
    async fn update_user(&self, id: &str, name: &str, email: &str) -> StoreResult<User>;

    /// Confirms the row exists before deleting it.
    async fn delete_user(&self, id: &str) -> StoreResult<()>;

    /// Round trip to the database without touching `users`.
    async fn ping(&self) -> StoreResult<()>;
}

const SELECT_USERS: &str = "SELECT id, name, email FROM users";
const SELECT_USER_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1::integer";
const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";
const UPDATE_USER: &str = "UPDATE users SET name = $1, email = $2 WHERE id = $3::integer";
const DELETE_USER: &str = "DELETE FROM users WHERE id = $1::integer";
const PING: &str = "SELECT 1";

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_read)
    }

    async fn get_user(&self, id: &str) -> StoreResult<User> {
        sqlx::query_as::<_, User>(SELECT_USER_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_read)
    }

    async fn create_user(&self, name: &str, email: &str) -> StoreResult<User> {
        let id = sqlx::query_scalar::<_, i32>(INSERT_USER)
            .bind(name)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::Insert)?;

        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    async fn update_user(&self, id: &str, name: &str, email: &str) -> StoreResult<User> {
        let mut tx = self.pool.begin().await.map_err(StoreError::Update)?;

        sqlx::query(UPDATE_USER)
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::Update)?;

        // Dropping `tx` on the error path rolls the write back.
        let user = sqlx::query_as::<_, User>(SELECT_USER_BY_ID)
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(StoreError::Query)?;

        tx.commit().await.map_err(StoreError::Update)?;
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> StoreResult<()> {
        sqlx::query_as::<_, User>(SELECT_USER_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::NotFound)?;

        sqlx::query(DELETE_USER)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Delete)?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query(PING)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Query)?;
        Ok(())
    }
}
