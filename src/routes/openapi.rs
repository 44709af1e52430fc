use axum::Json;
use utoipa::OpenApi;

use crate::dto::user_dto::UserPayload;
use crate::models::user::User;
use crate::routes::users;

#[derive(OpenApi)]
#[openapi(
    paths(
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(schemas(User, UserPayload)),
    tags((name = "users", description = "User records"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
