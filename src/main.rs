use shopping_server::cart::AppState;
use shopping_server::config::SearchConfig;
use shopping_server::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shopping_server=info,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    // Load search credentials from the environment
    let config = SearchConfig::from_env();
    if !config.is_configured() {
        tracing::warn!(
            "GOOGLE_API_KEY / GOOGLE_SEARCH_ENGINE_ID not set; searches will fail until configured"
        );
    }

    // Initialize application state
    let state = Arc::new(AppState::new(config));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server address");
    axum::serve(listener, app).await.expect("server error");
}
