pub mod car_repo;
pub mod errors;
pub mod memory_car_repo;

use async_trait::async_trait;

use crate::models::{Car, CarSearch};

pub use car_repo::MongoCarRepository;
pub use errors::{is_duplicate_key_error, RepositoryError};
pub use memory_car_repo::InMemoryCarRepository;

/// Storage for car listings keyed by their numeric `id`.
///
/// Every method is a single independent store round trip. Implementations
/// must agree on filter semantics: exact, case-sensitive string matches and
/// inclusive numeric bounds.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// All listings, in store-defined order.
    async fn list_all(&self) -> Result<Vec<Car>, RepositoryError>;

    /// Returns `Err(RepositoryError::NotFound)` if no listing has this id.
    async fn get_by_id(&self, id: i64) -> Result<Car, RepositoryError>;

    /// Inserts the listing as given.
    ///
    /// Returns `Err(RepositoryError::Conflict)` if the id is already taken.
    async fn create(&self, car: &Car) -> Result<Car, RepositoryError>;

    /// Replaces every field of the listing stored under `id` and returns the
    /// stored result. The stored listing keeps `id` whatever `car.id` says.
    async fn update(&self, id: i64, car: &Car) -> Result<Car, RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    async fn search(&self, search: &CarSearch) -> Result<Vec<Car>, RepositoryError>;

    /// Newest listings first, ties broken by ascending id.
    async fn featured(&self, limit: usize) -> Result<Vec<Car>, RepositoryError>;

    /// Distinct makes, sorted ascending.
    async fn distinct_makes(&self) -> Result<Vec<String>, RepositoryError>;

    /// Distinct models of one make, sorted ascending.
    async fn distinct_models(&self, make: &str) -> Result<Vec<String>, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Drops every listing and inserts `cars` in their place.
    async fn replace_all(&self, cars: &[Car]) -> Result<u64, RepositoryError>;

    async fn ping(&self) -> Result<(), RepositoryError>;

    async fn ensure_indexes(&self) -> Result<(), RepositoryError>;
}
