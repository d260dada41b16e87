use std::sync::Arc;

use tracing_test::traced_test;

use super::CarService;
use crate::error::AppError;
use crate::models::CarSearch;
use crate::repository::InMemoryCarRepository;
use crate::seed::seed_cars;

fn seeded_service() -> CarService {
    CarService::new(Arc::new(InMemoryCarRepository::with_cars(seed_cars())))
}

#[tokio::test]
#[traced_test]
async fn create_car_logs_created_listing() {
    let service = CarService::new(Arc::new(InMemoryCarRepository::new()));

    let created = service.create_car(seed_cars().remove(1)).await.unwrap();

    assert_eq!(created.id, 2);
    assert!(logs_contain("Created car 2 (2023 Honda Accord)"));
}

#[tokio::test]
#[traced_test]
async fn create_duplicate_is_conflict_and_logged() {
    let service = seeded_service();

    let err = service.create_car(seed_cars().remove(0)).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert!(logs_contain("Failed to create car 1"));
    assert!(!logs_contain("Created car 1"));
}

#[tokio::test]
#[traced_test]
async fn update_keeps_path_id_when_body_disagrees() {
    let service = seeded_service();
    let body = seed_cars().remove(0).with_id(77);

    let updated = service.update_car(4, body).await.unwrap();

    assert_eq!(updated.id, 4);
    assert_eq!(updated.make, "Toyota");
    assert!(logs_contain("Update body id 77 differs from path id 4"));
    assert!(logs_contain("Updated car 4"));
}

#[tokio::test]
async fn missing_car_is_not_found() {
    let service = seeded_service();

    assert!(matches!(service.get_car(99).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.delete_car(99).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.update_car(99, seed_cars().remove(0)).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(service.list_cars().await.unwrap().len(), 6);
}

#[tokio::test]
async fn featured_is_capped_at_three() {
    let service = seeded_service();
    let featured = service.featured_cars().await.unwrap();

    let years: Vec<i64> = featured.iter().map(|car| car.year).collect();
    assert_eq!(years, vec![2024, 2023, 2023]);
}

#[tokio::test]
#[traced_test]
async fn search_logs_match_count() {
    let service = seeded_service();
    let search = CarSearch {
        fuel_type: Some("Gasoline".to_string()),
        ..Default::default()
    };

    let cars = service.search_cars(search).await.unwrap();

    assert_eq!(cars.len(), 4);
    assert!(logs_contain("Search matched 4 cars"));
}

#[tokio::test]
#[traced_test]
async fn initialize_store_reports_connection_and_index() {
    let service = seeded_service();

    service.initialize_store().await;

    assert!(logs_contain("Connected to car store"));
    assert!(logs_contain("Unique index on car id is in place"));
    assert!(service.is_store_reachable().await);
}
