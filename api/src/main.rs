use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use sr_api::config::{init_tracing, load_config, warn_on_insecure_defaults};
use sr_api::{create_app, AppState, Repositories};
use sr_infra::{DatabasePool, MySqlRatingRepository, MySqlStoreRepository, MySqlUserRepository};

/// Production wiring: every repository backed by MySQL
struct MySqlRepositories;

impl Repositories for MySqlRepositories {
    type Users = MySqlUserRepository;
    type Stores = MySqlStoreRepository;
    type Ratings = MySqlRatingRepository;
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();
    init_tracing(&config.logging);
    warn_on_insecure_defaults(&config);

    tracing::info!(environment = %config.environment, "Starting StoreRating API");

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;

    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("failed to run database migrations")?;
    }

    let pool = database.get_pool().clone();
    let state = web::Data::new(AppState::<MySqlRepositories>::new(
        Arc::new(MySqlUserRepository::new(pool.clone())),
        Arc::new(MySqlStoreRepository::new(pool.clone())),
        Arc::new(MySqlRatingRepository::new(pool)),
        &config,
    ));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;

    tracing::info!("Server stopped; closing database pool");
    database.close().await;
    Ok(())
}
