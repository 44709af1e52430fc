use axum::body::Body;
use axum::http::header::{HeaderValue, CONTENT_TYPE};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Labels every response as JSON, error bodies included.
pub async fn json_content_type_middleware(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
