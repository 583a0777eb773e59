//! Health check endpoints.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use inkzenith_core::ports::PostQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub mounted_views: usize,
}

/// Liveness - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        mounted_views: state.views.len().await,
    };

    HttpResponse::Ok().json(response)
}

/// Readiness - the post store answers a one-row query.
///
/// GET /api/health/ready
pub async fn readiness(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.store.query(&PostQuery::first(1)).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ready" })))
}
