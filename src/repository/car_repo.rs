use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{
    ClientOptions, FindOneAndReplaceOptions, FindOptions, IndexOptions, ReturnDocument,
};
use mongodb::{Client, Collection, Database, IndexModel};

use super::{is_duplicate_key_error, CarRepository, RepositoryError};
use crate::config::MongoConfig;
use crate::constants::CARS_COLLECTION;
use crate::models::{Car, CarSearch};

/// Opens the client shared by the whole process.
pub async fn connect(config: &MongoConfig) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(config.uri()).await?;
    options.app_name = Some("car-dealer-api".to_string());
    Client::with_options(options)
}

#[derive(Clone)]
pub struct MongoCarRepository {
    database: Database,
    cars: Collection<Car>,
}

impl MongoCarRepository {
    pub fn new(database: Database) -> Self {
        let cars = database.collection::<Car>(CARS_COLLECTION);
        Self { database, cars }
    }
}

fn range_term(min: Option<i64>, max: Option<i64>) -> Option<Document> {
    if min.is_none() && max.is_none() {
        return None;
    }

    let mut range = Document::new();
    if let Some(min) = min {
        range.insert("$gte", min);
    }
    if let Some(max) = max {
        range.insert("$lte", max);
    }
    Some(range)
}

/// Query document for a search. Terms are implicitly ANDed.
pub fn search_filter(search: &CarSearch) -> Document {
    let mut filter = Document::new();

    for (field, value) in search.equality_terms() {
        filter.insert(field, value);
    }
    if let Some(range) = range_term(search.min_price, search.max_price) {
        filter.insert("price", range);
    }
    if let Some(range) = range_term(search.min_year, search.max_year) {
        filter.insert("year", range);
    }

    filter
}

fn sorted_strings(values: Vec<Bson>) -> Vec<String> {
    let mut strings: Vec<String> = values
        .into_iter()
        .filter_map(|value| match value {
            Bson::String(s) => Some(s),
            _ => None,
        })
        .collect();
    strings.sort();
    strings.dedup();
    strings
}

#[async_trait]
impl CarRepository for MongoCarRepository {
    async fn list_all(&self) -> Result<Vec<Car>, RepositoryError> {
        let cursor = self.cars.find(doc! {}, None).await?;
        let cars: Vec<Car> = cursor.try_collect().await?;
        Ok(cars)
    }

    async fn get_by_id(&self, id: i64) -> Result<Car, RepositoryError> {
        self.cars
            .find_one(doc! { "id": id }, None)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, car: &Car) -> Result<Car, RepositoryError> {
        let existing = self.cars.count_documents(doc! { "id": car.id }, None).await?;
        if existing > 0 {
            return Err(RepositoryError::Conflict(car.id));
        }

        self.cars.insert_one(car, None).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                RepositoryError::Conflict(car.id)
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Ok(car.clone())
    }

    async fn update(&self, id: i64, car: &Car) -> Result<Car, RepositoryError> {
        let replacement = car.clone().with_id(id);
        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.cars
            .find_one_and_replace(doc! { "id": id }, &replacement, options)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = self.cars.delete_one(doc! { "id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn search(&self, search: &CarSearch) -> Result<Vec<Car>, RepositoryError> {
        let cursor = self.cars.find(search_filter(search), None).await?;
        let cars: Vec<Car> = cursor.try_collect().await?;
        Ok(cars)
    }

    async fn featured(&self, limit: usize) -> Result<Vec<Car>, RepositoryError> {
        let options = FindOptions::builder()
            .sort(doc! { "year": -1, "id": 1 })
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .build();

        let cursor = self.cars.find(doc! {}, options).await?;
        let cars: Vec<Car> = cursor.try_collect().await?;
        Ok(cars)
    }

    async fn distinct_makes(&self) -> Result<Vec<String>, RepositoryError> {
        let values = self.cars.distinct("make", None, None).await?;
        Ok(sorted_strings(values))
    }

    async fn distinct_models(&self, make: &str) -> Result<Vec<String>, RepositoryError> {
        let values = self
            .cars
            .distinct("model", doc! { "make": make }, None)
            .await?;
        Ok(sorted_strings(values))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.cars.count_documents(doc! {}, None).await?)
    }

    async fn replace_all(&self, cars: &[Car]) -> Result<u64, RepositoryError> {
        self.cars.delete_many(doc! {}, None).await?;
        if !cars.is_empty() {
            self.cars.insert_many(cars, None).await?;
        }
        self.count().await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn ensure_indexes(&self) -> Result<(), RepositoryError> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.cars.create_index(index, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_builds_empty_filter() {
        assert_eq!(search_filter(&CarSearch::default()), doc! {});
    }

    #[test]
    fn equality_and_range_terms() {
        let search = CarSearch {
            make: Some("Honda".to_string()),
            fuel_type: Some("Gasoline".to_string()),
            min_price: Some(30000),
            max_price: Some(50000),
            ..Default::default()
        };

        assert_eq!(
            search_filter(&search),
            doc! {
                "make": "Honda",
                "fuel_type": "Gasoline",
                "price": { "$gte": 30000_i64, "$lte": 50000_i64 },
            }
        );
    }

    #[test]
    fn one_sided_year_range() {
        let search = CarSearch {
            max_year: Some(2022),
            ..Default::default()
        };

        assert_eq!(search_filter(&search), doc! { "year": { "$lte": 2022_i64 } });
    }

    #[test]
    fn blank_terms_are_left_out() {
        let search = CarSearch {
            model: Some(String::new()),
            transmission: Some("CVT".to_string()),
            ..Default::default()
        };

        assert_eq!(search_filter(&search), doc! { "transmission": "CVT" });
    }

    #[test]
    fn distinct_values_are_sorted_strings() {
        let values = vec![
            Bson::String("Toyota".to_string()),
            Bson::String("Audi".to_string()),
            Bson::Null,
            Bson::String("BMW".to_string()),
            Bson::String("Audi".to_string()),
        ];

        assert_eq!(sorted_strings(values), vec!["Audi", "BMW", "Toyota"]);
    }
}
