//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Liveness plus database probe |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "database": "ok" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::core::ServerState;
use shared::response::HealthResponse;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 200 when the database answers, 503 otherwise
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let db_ok = state.db.ping().await;
    if !db_ok {
        tracing::warn!("Health check: database unreachable");
    }

    let (status, label) = if db_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: if db_ok { "ok" } else { "error" }.to_string(),
        }),
    )
}
