// handlers/protected/career.rs - GET /api/career handler

use axum::{
    extract::{Query, State},
    response::Json,
    Extension,
};
use serde::Deserialize;
use tracing::debug;

use crate::career::{self, CareerChart, Locale};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CareerQuery {
    /// `en-US` or `pl-PL`; the configured default when absent.
    pub locale: Option<String>,
}

/**
 * GET /api/career?locale=pl-PL - Salary chart for the dashboard
 *
 * Runs the bundled compensation dataset through the chart pipeline: merge by
 * month, sort chronologically, derive the gross and bonus layers, localize
 * labels and attach tooltip text. Returns `{ "chart": {...}, "points": [...] }`.
 */
pub async fn career_get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<CareerQuery>,
) -> Result<Json<CareerChart>, ApiError> {
    let locale = match query.locale.as_deref().map(str::trim) {
        Some(tag) if !tag.is_empty() => tag.parse::<Locale>()?,
        _ => state.config.career.default_locale,
    };

    debug!(user_id = %user.user_id, %locale, "Rendering career chart");
    Ok(Json(career::render(&state.records, locale)))
}
