use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CarRepository, RepositoryError};
use crate::models::{Car, CarSearch};

/// Process-local car store with the same filter semantics as MongoDB.
///
/// Listings are kept ordered by id, which is the order `list_all` and
/// `search` return them in.
#[derive(Clone, Default)]
pub struct InMemoryCarRepository {
    cars: Arc<RwLock<BTreeMap<i64, Car>>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        let cars = cars.into_iter().map(|car| (car.id, car)).collect();
        Self {
            cars: Arc::new(RwLock::new(cars)),
        }
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn list_all(&self) -> Result<Vec<Car>, RepositoryError> {
        Ok(self.cars.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Car, RepositoryError> {
        self.cars
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, car: &Car) -> Result<Car, RepositoryError> {
        let mut cars = self.cars.write().await;
        if cars.contains_key(&car.id) {
            return Err(RepositoryError::Conflict(car.id));
        }
        cars.insert(car.id, car.clone());
        Ok(car.clone())
    }

    async fn update(&self, id: i64, car: &Car) -> Result<Car, RepositoryError> {
        let mut cars = self.cars.write().await;
        let stored = cars.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
        *stored = car.clone().with_id(id);
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.cars
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn search(&self, search: &CarSearch) -> Result<Vec<Car>, RepositoryError> {
        Ok(self
            .cars
            .read()
            .await
            .values()
            .filter(|car| search.matches(car))
            .cloned()
            .collect())
    }

    async fn featured(&self, limit: usize) -> Result<Vec<Car>, RepositoryError> {
        let mut cars = self.list_all().await?;
        // Stable sort over id-ordered input keeps ascending id within a year.
        cars.sort_by(|a, b| b.year.cmp(&a.year));
        cars.truncate(limit);
        Ok(cars)
    }

    async fn distinct_makes(&self) -> Result<Vec<String>, RepositoryError> {
        let makes: BTreeSet<String> = self
            .cars
            .read()
            .await
            .values()
            .map(|car| car.make.clone())
            .collect();
        Ok(makes.into_iter().collect())
    }

    async fn distinct_models(&self, make: &str) -> Result<Vec<String>, RepositoryError> {
        let models: BTreeSet<String> = self
            .cars
            .read()
            .await
            .values()
            .filter(|car| car.make == make)
            .map(|car| car.model.clone())
            .collect();
        Ok(models.into_iter().collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.cars.read().await.len() as u64)
    }

    async fn replace_all(&self, cars: &[Car]) -> Result<u64, RepositoryError> {
        let mut stored = self.cars.write().await;
        *stored = cars.iter().map(|car| (car.id, car.clone())).collect();
        Ok(stored.len() as u64)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn ensure_indexes(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
