use axum::{
    Json,
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};

use crate::problem::Problem;

/// Result type for REST handlers.
pub type ApiResult<T = axum::response::Response> = Result<T, Problem>;

/// Short alias for JSON responses
pub type JsonBody<T> = Json<T>;

/// 201 Created + JSON with Location header
pub fn created_json<T: serde::Serialize>(
    value: T,
    uri: &Uri,
    new_id: &str,
) -> impl IntoResponse + use<T> {
    let location = [uri.path().trim_end_matches('/'), new_id].join("/");
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(value),
    )
}

/// 204 No Content
#[must_use]
pub fn no_content() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
