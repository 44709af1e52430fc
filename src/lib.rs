pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use crate::observability::{hooks_for, OperationHooks};
use crate::repository::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub hooks: Arc<dyn OperationHooks>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, debug: bool) -> Self {
        Self::with_hooks(users, hooks_for(debug))
    }

    pub fn with_hooks(users: Arc<dyn UserRepository>, hooks: Arc<dyn OperationHooks>) -> Self {
        Self { users, hooks }
    }
}
