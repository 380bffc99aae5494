// handlers/public/auth/login.rs - POST /api/login handler

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Serialize;
use tracing::info;

use super::Credentials;
use crate::auth::{generate_jwt, Claims};
use crate::error::ApiError;
use crate::services::user_service::normalize_email;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/**
 * POST /api/login - Authenticate and receive a JWT
 *
 * Input: `{ "email": "string", "password": "string" }`
 * Output: `200 { "token": "eyJ...", "expiresIn": 3600 }`
 *
 * Unknown emails and wrong passwords both answer 401 with the same message.
 * The token carries the user id as `sub` and the email as a claim.
 */
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(credentials) = payload?;

    let email = normalize_email(&credentials.email);
    let user = state.users.authenticate(&email, &credentials.password).await?;

    let security = &state.config.security;
    let claims = Claims::new(user.id, user.email, security.jwt_expiry_secs);
    let token = generate_jwt(&claims, security)?;

    info!(user_id = %user.id, "Issued session token");
    Ok(Json(LoginResponse {
        token,
        expires_in: security.jwt_expiry_secs,
    }))
}
