use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::json;

use crate::service::CarService;

pub fn router() -> Router<CarService> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(service): State<CarService>) -> (StatusCode, Json<serde_json::Value>) {
    if service.is_store_reachable().await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "message": "Car dealer API is healthy"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "message": "Car store is unreachable"
            })),
        )
    }
}
