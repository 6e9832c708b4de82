//! STK payment gateway - entry point.

use payhero_client::PayHeroClient;
use std::net::SocketAddr;
use std::sync::Arc;
use stk_gateway::{
    api::{create_router_with_rate_limit, AppState, RateLimitState},
    config::Config,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting STK payment gateway");

    if config.payhero.auth_token.is_empty() {
        warn!("PAYHERO__AUTH_TOKEN is not set, provider calls will be rejected");
    }
    if config.payhero.channel_id.is_empty() {
        warn!("PAYHERO__CHANNEL_ID is not set, charges will likely be rejected");
    }

    // Initialize provider client
    let client = match PayHeroClient::new(&config.payhero.api_url, &config.payhero.auth_token) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create PayHero client: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state
    let state = AppState::new(Arc::new(client), config.confirm_config());

    // Create rate limiter from config
    let rate_limit = RateLimitState::new(config.rate_limit.global_per_minute);

    let app = create_router_with_rate_limit(state, rate_limit);

    // Bind to address
    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
