use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::{response::Html, routing::get, Router};
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::service::CarService;

/// Root page plus the read-only asset folders.
pub fn router(frontend_dir: &Path, static_dir: &Path) -> Router<CarService> {
    let index = frontend_dir.join("index.html");

    Router::new()
        .route("/", get(move || serve_index(index.clone())))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest_service("/css", ServeDir::new(frontend_dir.join("css")))
        .nest_service("/js", ServeDir::new(frontend_dir.join("js")))
        .nest_service("/images", ServeDir::new(frontend_dir.join("images")))
}

async fn serve_index(path: PathBuf) -> Result<Html<String>, AppError> {
    let page = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Html(page))
}
