use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::user_dto::UserPayload,
    error::{Error, Result},
    models::user::User,
    observability::observe,
    AppState,
};

pub const DELETED_MESSAGE: &str = "User deleted successfully";

#[utoipa::path(
    get,
    path = "/api/go/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, possibly empty", body = [User]),
        (status = 500, description = "Query failed", body = String)
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = observe(
        state.hooks.as_ref(),
        "list_users",
        "fetching all users",
        state.users.list_users(),
        |users: &Vec<User>| format!("fetched {} users", users.len()),
    )
    .await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/go/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this id", body = String),
        (status = 500, description = "Query failed", body = String)
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let user = observe(
        state.hooks.as_ref(),
        "get_user",
        &format!("fetching user {}", id),
        state.users.get_user(&id),
        |user: &User| format!("fetched user {} ({})", user.id, user.email),
    )
    .await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/go/users",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Body is not a user payload", body = String),
        (status = 500, description = "Insert failed", body = String)
    )
)]
#[axum::debug_handler]
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse> {
    let payload = UserPayload::parse(&body).map_err(|e| Error::BadRequest(e.to_string()))?;
    let user = observe(
        state.hooks.as_ref(),
        "create_user",
        &format!("creating user {} <{}>", payload.name, payload.email),
        state.users.create_user(&payload.name, &payload.email),
        |user: &User| format!("created user {}", user.id),
    )
    .await?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/api/go/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "The row as stored after the update", body = User),
        (
            status = 500,
            description = "Write or re-read failed, including unknown ids",
            body = String
        )
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let payload = UserPayload::parse_or_default(&body);
    let user = observe(
        state.hooks.as_ref(),
        "update_user",
        &format!("updating user {} to {} <{}>", id, payload.name, payload.email),
        state.users.update_user(&id, &payload.name, &payload.email),
        |user: &User| format!("updated user {}", user.id),
    )
    .await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/go/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 404, description = "No user with this id, or the delete failed", body = String)
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    observe(
        state.hooks.as_ref(),
        "delete_user",
        &format!("deleting user {}", id),
        state.users.delete_user(&id),
        |_: &()| format!("deleted user {}", id),
    )
    .await?;
    Ok(Json(DELETED_MESSAGE))
}
