use axum::{
    extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, routing::post,
    Json, Router,
};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/parse", post(parse_name))
}

pub async fn parse_name(
    body: Result<Json<dto::ParseRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match body.input.as_deref().and_then(cookbook_recipes::normalize_name) {
        Some(msg) => (StatusCode::OK, Json(dto::ParseResponse { msg })).into_response(),
        None => errors::json_error(StatusCode::BAD_REQUEST, "invalid_name", "this string is cooked"),
    }
}
