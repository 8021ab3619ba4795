mod config;
mod controller;
mod data;
mod doc;
mod error;
mod hub;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, hub::NotificationHub, service::mailer::Mailer,
    service::token::TokenService, state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Fatal startup error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // One-time setup is awaited before the listener opens so requests never
    // race the initializer.
    startup::initialize(&db, &config).await?;

    let tokens = TokenService::new(&config.token_key, config.token_ttl_seconds);
    let hub = NotificationHub::new();
    let mailer = config.mail.clone().map(Mailer::new).transpose()?;
    let cors = router::cors_layer(&config.allowed_origins)?;

    if mailer.is_none() {
        tracing::info!("Mail settings absent, outbound mail disabled");
    }

    let state = AppState::new(
        db,
        tokens,
        hub,
        mailer,
        Arc::new(config.customers.clone()),
    );

    let app = router::router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
