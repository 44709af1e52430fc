use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use user_service::error::{StoreError, StoreResult};
use user_service::models::user::User;
use user_service::repository::UserRepository;

/// `users` table held in memory, failing the way Postgres does for the same
/// statements.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<TableState>,
}

#[derive(Default)]
struct TableState {
    rows: BTreeMap<i32, User>,
    last_id: i32,
}

fn parse_id(id: &str) -> Result<i32, sqlx::Error> {
    id.parse().map_err(|_| {
        sqlx::Error::Protocol(format!(
            "invalid input syntax for type integer: \"{}\"",
            id
        ))
    })
}

impl InMemoryUserRepository {
    pub fn seeded(users: &[(i32, &str, &str)]) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.state.lock().unwrap();
            for (id, name, email) in users {
                state.rows.insert(
                    *id,
                    User {
                        id: *id,
                        name: name.to_string(),
                        email: email.to_string(),
                    },
                );
                state.last_id = state.last_id.max(*id);
            }
        }
        repo
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.state.lock().unwrap().rows.values().cloned().collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.snapshot())
    }

    async fn get_user(&self, id: &str) -> StoreResult<User> {
        let id = parse_id(id).map_err(StoreError::Query)?;
        self.state
            .lock()
            .unwrap()
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(sqlx::Error::RowNotFound))
    }

    async fn create_user(&self, name: &str, email: &str) -> StoreResult<User> {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let user = User {
            id: state.last_id,
            name: name.to_string(),
            email: email.to_string(),
        };
        state.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &str, name: &str, email: &str) -> StoreResult<User> {
        let id = parse_id(id).map_err(StoreError::Update)?;
        let mut state = self.state.lock().unwrap();
        match state.rows.get_mut(&id) {
            Some(row) => {
                row.name = name.to_string();
                row.email = email.to_string();
                Ok(row.clone())
            }
            None => Err(StoreError::Query(sqlx::Error::RowNotFound)),
        }
    }

    async fn delete_user(&self, id: &str) -> StoreResult<()> {
        let id = parse_id(id).map_err(StoreError::NotFound)?;
        let mut state = self.state.lock().unwrap();
        state
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(sqlx::Error::RowNotFound))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
