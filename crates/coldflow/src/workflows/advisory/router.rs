use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::service::{AdvisoryService, ProductionRequest};
use crate::workflows::logistics::SiteObservation;

/// Router builder exposing the production and logistics advisory endpoints.
pub fn advisory_router(service: Arc<AdvisoryService>) -> Router {
    Router::new()
        .route(
            "/api/v1/production/recommendation",
            post(production_handler),
        )
        .route("/api/v1/logistics/diagnostics", post(logistics_handler))
        .route("/api/v1/rulebook", get(rulebook_handler))
        .with_state(service)
}

pub(crate) async fn production_handler(
    State(service): State<Arc<AdvisoryService>>,
    Json(request): Json<ProductionRequest>,
) -> Response {
    match service.production(&request) {
        Ok(advice) => (StatusCode::OK, Json(advice)).into_response(),
        Err(error) => {
            warn!(%error, "production request rejected");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn logistics_handler(
    State(service): State<Arc<AdvisoryService>>,
    Json(observation): Json<SiteObservation>,
) -> Response {
    match service.logistics(observation) {
        Ok(advice) => (StatusCode::OK, Json(advice)).into_response(),
        Err(error) => {
            warn!(%error, "logistics request rejected");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn rulebook_handler(State(service): State<Arc<AdvisoryService>>) -> Response {
    (StatusCode::OK, Json(service.rulebook().clone())).into_response()
}
