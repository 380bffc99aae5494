// handlers/public/health.rs - GET / and GET /health

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppState;

/// GET / - service banner
pub async fn root_get() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "public": ["POST /api/register", "POST /api/login", "GET /health"],
            "protected": ["GET /api/auth/whoami", "GET /api/career"]
        }
    }))
}

/// GET /health - 200 when the user store answers, 503 otherwise
pub async fn health_get(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let store = state.users.store();
    let (status, store_status) = match store.health_check().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            error!("User store health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "ok" } else { "degraded" },
            "timestamp": Utc::now(),
            "store": {
                "backend": store.backend(),
                "status": store_status
            },
            "records": state.records.len()
        })),
    )
}
