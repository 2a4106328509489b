mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::{code::ErrorCode, AppError},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    run().await.inspect_err(|e| {
        let code = match e {
            AppError::DbErr(_) => ErrorCode::DatabaseConnection,
            _ => ErrorCode::AppLoad,
        };
        tracing::error!("{} ({}): {}", code.message(), code.code(), e);
    })
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let router = startup::build_router(AppState::new(db), &config.cors_allowed_origins);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
