use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use catalog::config::{Config, DatabaseConfig, StoreKind};
use catalog::core::store::{InMemoryRepository, MySqlRepository};
use catalog::core::Repository;
use catalog::middleware::{ErrorLogger, RequestId};
use catalog::products::Product;
use catalog::{health, products, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    telemetry::init(&config.app.log_level, config.app.log_format);

    tracing::info!("Starting product catalog");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let (repository, db_pool) = match config.store {
        StoreKind::MySql => {
            let database = config
                .database
                .as_ref()
                .context("MySQL store selected but no database configured")?;

            let pool = database
                .create_pool()
                .await
                .context("Failed to create database pool")?;
            DatabaseConfig::migrate(&pool)
                .await
                .context("Failed to run migrations")?;

            tracing::info!(
                "Database pool initialized ({} connections)",
                database.pool_size
            );

            let repository: Arc<dyn Repository<Product>> =
                Arc::new(MySqlRepository::<Product>::new(pool.clone()));
            (repository, Some(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory product store; data is lost on shutdown");
            let repository: Arc<dyn Repository<Product>> =
                Arc::new(InMemoryRepository::<Product>::new());
            (repository, None)
        }
    };

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(ErrorLogger)
            .wrap(RequestId)
            .wrap(TracingLogger::default());

        if let Some(pool) = &db_pool {
            app = app.app_data(web::Data::new(pool.clone()));
        }

        app.configure(products::configure(repository.clone()))
            .configure(health::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
