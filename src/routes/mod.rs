pub mod health;
pub mod openapi;
pub mod users;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::middleware::{content_type::json_content_type_middleware, cors::cors_middleware};
use crate::AppState;

pub const API_BASE: &str = "/api/go";

/// Builds the full application: routes wrapped as CORS ∘ ContentType ∘ Router.
pub fn router(state: AppState) -> Router {
    let users_api = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/openapi.json", get(openapi::openapi_json));

    Router::new()
        .route("/health", get(health::health))
        .nest(API_BASE, users_api)
        .fallback(not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(json_content_type_middleware))
        .layer(axum::middleware::from_fn(cors_middleware))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json("404 page not found"))
}
