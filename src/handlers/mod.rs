// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) handlers issue accounts and tokens. Protected handlers
// sit behind the JWT middleware and serve the dashboard data.

pub mod protected; // JWT authentication required (/api/auth/*, /api/career)
pub mod public;    // No authentication (/api/register, /api/login, /health)

use axum::http::Method;

use crate::error::ApiError;

/// Fallback for routes that exist but were called with the wrong method.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(format!("Method {} not allowed", method))
}
