//! Route definitions for the User API

mod user;

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::handlers::{health_check, root};
use crate::middleware;
use crate::state::AppState;

pub use user::user_routes;

/// Build the application router with all routes and middleware
pub fn create_router(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(user_routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::security_headers));

    if config.environment.is_production() {
        router = router.layer(axum::middleware::from_fn(middleware::hsts_header));
    }

    router
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(config.cors_allowed_origins.as_deref()))
}

fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .unwrap_or_default()
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse().ok()
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
