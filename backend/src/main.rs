// src/main.rs

use codelab_backend::config::Config;
use codelab_backend::routes;
use codelab_backend::state::AppState;
use codelab_backend::store::{ContentStore, seed::CatalogSeed};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Build the catalog before serving; it is never mutated afterwards.
    let seed = match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path);
            CatalogSeed::from_file(path).expect("Failed to read catalog file")
        }
        None => {
            tracing::info!("Loading built-in catalog");
            codelab_backend::store::seed::builtin()
        }
    };
    let catalog = ContentStore::from_seed(seed).expect("Failed to build catalog");

    let state = AppState::new(catalog, config.clone());

    // Seed the default learner
    if let Err(e) = state
        .users
        .ensure_user(&config.learner_username, &config.learner_password)
        .await
    {
        tracing::error!("Failed to seed default learner: {:?}", e);
    }

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listening address");

    // Start the server
    axum::serve(listener, app).await.expect("Server error");
}
