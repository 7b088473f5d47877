//! Health endpoints.
//!
//! `/health` reports store reachability with the current entry count.
//! `/health/live` and `/health/ready` are bare orchestration probes.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Shared probe state.
///
/// Starts not ready but live. `create_server` flips readiness once the server
/// is bound; the shutdown drain in `main` fails liveness before stopping.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Fresh state: alive but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report ready once the server has started.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness probes so orchestrators stop routing traffic.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the readiness probe succeeds.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether the liveness probe succeeds.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response.insert_header(no_store_header()).finish()
    }
}

/// Body of a successful `/health` check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "connected")]
    pub database: String,
    #[schema(example = 12)]
    pub entries_count: u64,
    /// Check time in RFC 3339.
    #[schema(example = "2026-05-04T07:30:00+00:00")]
    pub timestamp: String,
}

/// Report store reachability and the current entry count.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 500, description = "Store unreachable", body = ErrorEnvelope)
    ),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let report = state
        .diagnostics
        .health()
        .await
        .map_err(|err| err.context("Health check failed"))?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_owned(),
        database: "connected".to_owned(),
        entries_count: report.entries_count,
        timestamp: report.checked_at.to_rfc3339(),
    }))
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}
