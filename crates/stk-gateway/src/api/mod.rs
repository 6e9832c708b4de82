//! HTTP API for the payment gateway.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{logging_middleware, rate_limit_middleware, RateLimitState};
pub use types::*;

use crate::confirm::ConfirmConfig;
use crate::provider::PaymentProvider;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Payment provider client
    pub provider: Arc<dyn PaymentProvider>,
    /// Poller configuration
    pub confirm: ConfirmConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(provider: Arc<dyn PaymentProvider>, confirm: ConfirmConfig) -> Self {
        Self { provider, confirm }
    }
}

/// Create the API router with a permissive rate limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_rate_limit(state, RateLimitState::new(60))
}

/// Create the API router with custom rate limiting.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/charge", post(handlers::charge))
        // Status route without a reference is a client error, not a 404
        .route(
            "/api/transaction-status",
            get(handlers::transaction_status_missing),
        )
        .route(
            "/api/transaction-status/:reference",
            get(handlers::transaction_status),
        )
        .route("/api/wallet-balance", get(handlers::wallet_balance))
        .layer(axum_middleware::from_fn_with_state(
            rate_limit.clone(),
            rate_limit_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
