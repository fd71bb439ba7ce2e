use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/summary", get(get_summary))
}

pub async fn get_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SummaryQuery>,
) -> axum::response::Response {
    let Some(name) = query.name else {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_name", "name is required");
    };

    match services.summary(&name) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            tracing::debug!(name = %name, error = %e, "summary unavailable");
            errors::domain_error_to_response(e)
        }
    }
}
