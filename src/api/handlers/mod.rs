use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::error::CookbookError;
use crate::models::*;
use crate::normalize::normalize_name;
use crate::store::Cookbook;

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// Log a validation failure and return it to the client as a 400.
///
/// Every cookbook error is a user-facing validation outcome, so the message
/// is passed through unchanged.
fn bad_request(e: CookbookError) -> ApiError {
    tracing::warn!("Validation error: {}", e);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
}

/// A request body that could not be read as a JSON object.
fn rejected_body(e: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {}", e.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: e.body_text(),
        }),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Name normalization
// ============================================================

pub async fn parse(
    payload: Result<Json<ParseInput>, JsonRejection>,
) -> Result<Json<ParseOutput>, ApiError> {
    let Json(input) = payload.map_err(rejected_body)?;
    normalize_name(&input.input)
        .map(|msg| Json(ParseOutput { msg }))
        .ok_or_else(|| bad_request(CookbookError::InvalidName))
}

// ============================================================
// Entries
// ============================================================

pub async fn create_entry(
    State(cookbook): State<Cookbook>,
    payload: Result<Json<CreateEntryInput>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(input) = payload.map_err(rejected_body)?;
    cookbook.insert(input).map_err(bad_request)?;
    Ok(Json(serde_json::json!({})))
}

pub async fn get_entry(
    State(cookbook): State<Cookbook>,
    Path(name): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    cookbook.lookup(&name).map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: CookbookError::NotFound(name).to_string(),
            }),
        )
    })
}

// ============================================================
// Summary
// ============================================================

pub async fn summary(
    State(cookbook): State<Cookbook>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<RecipeSummary>, ApiError> {
    let name = query
        .name
        .ok_or_else(|| bad_request(CookbookError::MissingField("name")))?;
    cookbook.summarize(&name).map(Json).map_err(bad_request)
}
