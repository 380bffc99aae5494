// handlers/public/auth/register.rs - POST /api/register handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::Credentials;
use crate::error::ApiError;
use crate::services::user_service::{normalize_email, validate_email_format, validate_password};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: Uuid,
}

/**
 * POST /api/register - Create a new account
 *
 * Input: `{ "email": "string", "password": "string" }`
 * Output: `201 { "userId": "uuid" }`
 *
 * The email is trimmed and lowercased before it is checked or stored, so
 * `Ola@Example.com` and `ola@example.com` are the same account. An email that
 * is already registered is rejected with 400 and nothing is written.
 */
pub async fn register_post(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(credentials) = payload?;

    let email = normalize_email(&credentials.email);
    validate_email_format(&email).map_err(|msg| ApiError::field_error("email", msg))?;
    validate_password(&credentials.password).map_err(|msg| ApiError::field_error("password", msg))?;

    let user_id = state.users.register(&email, &credentials.password).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { user_id })))
}
