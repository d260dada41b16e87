use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::extract::ValidatedJson;
use crate::models::{Car, CarSearch, MessageResponse};
use crate::service::CarService;

pub fn router() -> Router<CarService> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/search", post(search_cars))
        .route("/{id}", get(get_car).put(update_car).delete(delete_car))
}

async fn list_cars(State(service): State<CarService>) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(service.list_cars().await?))
}

async fn get_car(
    State(service): State<CarService>,
    Path(id): Path<i64>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(service.get_car(id).await?))
}

async fn create_car(
    State(service): State<CarService>,
    ValidatedJson(car): ValidatedJson<Car>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    tracing::info!("{} Received create request for car {}", API_NAME, car.id);

    let created = service.create_car(car).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_car(
    State(service): State<CarService>,
    Path(id): Path<i64>,
    ValidatedJson(car): ValidatedJson<Car>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(service.update_car(id, car).await?))
}

async fn delete_car(
    State(service): State<CarService>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    service.delete_car(id).await?;
    Ok(Json(MessageResponse::new("Car deleted")))
}

async fn search_cars(
    State(service): State<CarService>,
    ValidatedJson(search): ValidatedJson<CarSearch>,
) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(service.search_cars(search).await?))
}
