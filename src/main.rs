use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use car_dealer_api::{
    app,
    config::{Config, StoreKind},
    constants::API_NAME,
    repository::{car_repo, CarRepository, InMemoryCarRepository, MongoCarRepository},
    seed::seed_cars,
    service::CarService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "{} Starting car dealer API on port {}",
        API_NAME,
        config.server_port
    );

    // The Mongo client lives for the whole process and is shut down after the server stops.
    let (repository, client) = match (config.store, &config.mongo) {
        (StoreKind::Mongo, Some(mongo)) => {
            let client = car_repo::connect(mongo)
                .await
                .context("Failed to create MongoDB client")?;
            let repository: Arc<dyn CarRepository> =
                Arc::new(MongoCarRepository::new(client.database(&mongo.database)));
            (repository, Some(client))
        }
        _ => {
            tracing::warn!("{} Using in-memory car store seeded with demo data", API_NAME);
            let repository: Arc<dyn CarRepository> =
                Arc::new(InMemoryCarRepository::with_cars(seed_cars()));
            (repository, None)
        }
    };

    let service = CarService::new(repository);
    service.initialize_store().await;

    let router = app(service, &config.frontend_dir, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(client) = client {
        client.shutdown().await;
        tracing::info!("{} MongoDB client closed", API_NAME);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
        std::future::pending::<()>().await;
    }
    tracing::info!("{} Shutdown signal received", API_NAME);
}
