//! Loads the reference inventory into the configured MongoDB collection.

use anyhow::{bail, Context};
use car_dealer_api::{
    config::Config,
    constants::API_NAME,
    repository::{car_repo, CarRepository, MongoCarRepository},
    seed::seed_cars,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "seed", about = "Replace the car collection with the demo inventory")]
struct Args {
    /// Only ping the store and print the current number of cars.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = Config::from_env().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(mongo) = config.mongo.as_ref() else {
        bail!("Seeding needs CAR_STORE=mongo; the in-memory store seeds itself");
    };

    let client = car_repo::connect(mongo)
        .await
        .context("Failed to create MongoDB client")?;
    let repository = MongoCarRepository::new(client.database(&mongo.database));

    repository.ping().await.context("Could not reach MongoDB")?;
    tracing::info!("{} Connected to MongoDB", API_NAME);

    if args.check {
        let count = repository.count().await?;
        tracing::info!("{} Cars count: {}", API_NAME, count);
    } else {
        repository.ensure_indexes().await?;
        let count = repository.replace_all(&seed_cars()).await?;
        tracing::info!("{} Seeded {} cars", API_NAME, count);
    }

    client.shutdown().await;
    Ok(())
}
