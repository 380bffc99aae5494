// handlers/protected/auth/whoami.rs - GET /api/auth/whoami handler

use axum::{response::Json, Extension};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::middleware::AuthUser;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoamiResponse {
    pub user_id: Uuid,
    pub email: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// GET /api/auth/whoami - identity carried by the presented token
pub async fn whoami_get(Extension(user): Extension<AuthUser>) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        user_id: user.user_id,
        email: user.email,
        expires_at: DateTime::from_timestamp(user.expires_at, 0),
    })
}
