use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::models::{Car, MakesResponse, ModelsResponse};
use crate::service::CarService;

pub fn router() -> Router<CarService> {
    Router::new()
        .route("/featured", get(featured_cars))
        .route("/makes", get(car_makes))
        .route("/models/{make}", get(car_models))
}

async fn featured_cars(State(service): State<CarService>) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(service.featured_cars().await?))
}

async fn car_makes(State(service): State<CarService>) -> Result<Json<MakesResponse>, AppError> {
    let makes = service.makes().await?;
    Ok(Json(MakesResponse { makes }))
}

async fn car_models(
    State(service): State<CarService>,
    Path(make): Path<String>,
) -> Result<Json<ModelsResponse>, AppError> {
    let models = service.models(&make).await?;
    Ok(Json(ModelsResponse { models }))
}
