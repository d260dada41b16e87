use std::sync::Arc;

use crate::constants::{API_NAME, FEATURED_LIMIT};
use crate::error::AppError;
use crate::models::{Car, CarSearch};
use crate::repository::CarRepository;

/// Car inventory operations behind the HTTP handlers.
///
/// Cheap to clone: every clone shares the injected repository.
#[derive(Clone)]
pub struct CarService {
    repository: Arc<dyn CarRepository>,
}

impl CarService {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        let cars = self.repository.list_all().await?;
        tracing::debug!("{} Listed {} cars", API_NAME, cars.len());
        Ok(cars)
    }

    pub async fn get_car(&self, id: i64) -> Result<Car, AppError> {
        Ok(self.repository.get_by_id(id).await?)
    }

    pub async fn create_car(&self, car: Car) -> Result<Car, AppError> {
        let created = self.repository.create(&car).await.map_err(|e| {
            tracing::warn!("{} Failed to create car {}: {}", API_NAME, car.id, e);
            e
        })?;

        tracing::info!(
            "{} Created car {} ({} {} {})",
            API_NAME,
            created.id,
            created.year,
            created.make,
            created.model
        );
        Ok(created)
    }

    pub async fn update_car(&self, id: i64, car: Car) -> Result<Car, AppError> {
        if car.id != id {
            tracing::warn!(
                "{} Update body id {} differs from path id {}, keeping {}",
                API_NAME,
                car.id,
                id,
                id
            );
        }

        let updated = self.repository.update(id, &car).await?;
        tracing::info!("{} Updated car {}", API_NAME, id);
        Ok(updated)
    }

    pub async fn delete_car(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!("{} Deleted car {}", API_NAME, id);
        Ok(())
    }

    pub async fn search_cars(&self, search: CarSearch) -> Result<Vec<Car>, AppError> {
        let cars = self.repository.search(&search).await?;
        tracing::info!("{} Search matched {} cars", API_NAME, cars.len());
        Ok(cars)
    }

    pub async fn featured_cars(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.repository.featured(FEATURED_LIMIT).await?)
    }

    pub async fn makes(&self) -> Result<Vec<String>, AppError> {
        Ok(self.repository.distinct_makes().await?)
    }

    pub async fn models(&self, make: &str) -> Result<Vec<String>, AppError> {
        Ok(self.repository.distinct_models(make).await?)
    }

    /// Pings the store and creates the unique `id` index.
    ///
    /// Failures are logged and swallowed: the server still starts, and
    /// requests fail later at their own store call.
    pub async fn initialize_store(&self) {
        match self.repository.ping().await {
            Ok(()) => tracing::info!("{} Connected to car store", API_NAME),
            Err(e) => tracing::error!("{} Could not connect to car store: {}", API_NAME, e),
        }

        match self.repository.ensure_indexes().await {
            Ok(()) => tracing::info!("{} Unique index on car id is in place", API_NAME),
            Err(e) => tracing::error!("{} Failed to create car id index: {}", API_NAME, e),
        }
    }

    /// True when the store answers a ping.
    pub async fn is_store_reachable(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{} Health check ping failed: {}", API_NAME, e);
                false
            }
        }
    }
}
