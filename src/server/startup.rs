//! Startup helpers: tracing, database, demo data, CORS and shutdown.

use axum::http::{HeaderValue, Method};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait,
    TransactionTrait,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds demo roles, categories and products into an empty catalog.
///
/// Does nothing when any category already exists, so restarting with `SEED_DATA=true`
/// is safe. Users are not seeded; they are created through the API so that their
/// passwords are chosen by an operator.
///
/// # Returns
/// - `Ok(())` - Demo data inserted or catalog already populated
/// - `Err(AppError::DbErr)` - Insert failed; nothing is committed
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), AppError> {
    if entity::prelude::Category::find().count(db).await? > 0 {
        tracing::debug!("Catalog already populated, skipping demo data");
        return Ok(());
    }

    let txn = db.begin().await?;

    if entity::prelude::Role::find().count(&txn).await? == 0 {
        for authority in ["ROLE_OPERATOR", "ROLE_ADMIN"] {
            entity::role::ActiveModel {
                authority: ActiveValue::Set(authority.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    let mut category_ids = Vec::new();
    for name in ["Livros", "Eletrônicos", "Computadores"] {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        category_ids.push(category.id);
    }

    let products = [
        ("The Lord of the Rings", Decimal::new(9050, 2), vec![category_ids[0]]),
        ("Smart TV", Decimal::new(219000, 2), vec![category_ids[1], category_ids[2]]),
        ("Macbook Pro", Decimal::new(125000, 2), vec![category_ids[2]]),
        ("PC Gamer", Decimal::new(120000, 2), vec![category_ids[2]]),
        ("PC Gamer Alfa", Decimal::new(184110, 2), vec![category_ids[2]]),
    ];
    let date = Utc.with_ymd_and_hms(2020, 7, 13, 20, 50, 7).single().unwrap_or_else(Utc::now);

    for (name, price, categories) in products {
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("{} demo product", name)),
            price: ActiveValue::Set(price),
            img_url: ActiveValue::Set(String::new()),
            date: ActiveValue::Set(date),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for category_id in categories {
            entity::product_category::ActiveModel {
                product_id: ActiveValue::Set(product.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    tracing::info!("Seeded demo catalog data");

    Ok(())
}

/// Builds the CORS layer for the configured origin, if any.
///
/// # Returns
/// - `Ok(Some(CorsLayer))` - Origin configured and valid
/// - `Ok(None)` - No origin configured; cross-origin requests are not allowed
/// - `Err(ConfigError::InvalidEnvVar)` - Origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_allowed_origin.as_deref() else {
        return Ok(None);
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        value: origin.to_string(),
    })?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    ))
}

/// Resolves when Ctrl-C is received, starting graceful shutdown.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
