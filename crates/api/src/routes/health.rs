use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Service identifier for dashboards and uptime checks.
    pub service: &'static str,
    /// Which listing backend is active ("postgres" or "memory").
    pub backend: &'static str,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "haven-api",
        backend: state.backend,
    })
}

/// Service banner response payload.
#[derive(Serialize)]
pub struct BannerResponse {
    pub name: &'static str,
    pub status: &'static str,
    pub endpoints: [&'static str; 3],
}

/// GET / -- quick smoke check listing the available endpoints.
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        name: "Haven Listings Backend",
        status: "ok",
        endpoints: ["/health", "/listings", "/listings/{id}"],
    })
}

/// Mount the root-level service routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
}
