use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/entry", post(create_entry))
        .route("/entry/:name", get(get_entry))
}

pub async fn create_entry(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "entry body rejected");
            return errors::json_rejection_to_response(rejection);
        }
    };

    match services.create_entry(&body) {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "entry rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn get_entry(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.entry(&name) {
        Ok(Some(entry)) => (StatusCode::OK, Json(entry)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "entry not found"),
        Err(e) => errors::domain_error_to_response(e),
    }
}
