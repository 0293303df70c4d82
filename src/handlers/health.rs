//! Health check and root handlers

use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::db;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

pub async fn root() -> &'static str {
    "User API Server"
}

/// Health check endpoint
pub async fn health_check(State(pool): State<PgPool>) -> Json<HealthResponse> {
    let (status, database) = match db::check_health(&pool).await {
        Ok(()) => ("healthy", "connected".to_string()),
        Err(e) => ("unhealthy", format!("error: {}", e)),
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
