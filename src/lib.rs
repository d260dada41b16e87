pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;

use std::path::Path;

use axum::Router;
use handlers::{car, catalog, frontend, health};
use service::CarService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application router: JSON API under `/api`, frontend at the root.
pub fn app(service: CarService, frontend_dir: &Path, static_dir: &Path) -> Router {
    let api = Router::new()
        .nest("/cars", car::router())
        .merge(catalog::router())
        .merge(health::router());

    Router::new()
        .nest("/api", api)
        .merge(frontend::router(frontend_dir, static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
