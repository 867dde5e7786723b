mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if config.seed_data {
        startup::seed_demo_data(&db).await?;
    }

    let app = router::app(AppState::new(db, config.page_defaults));
    let app = match startup::cors_layer(&config)? {
        Some(cors) => app.layer(cors),
        None => app,
    };

    let listener = TcpListener::bind(config.server_addr).await?;
    tracing::info!("Starting server on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
