use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{CandidateSet, PreferenceProfile, Recommendation, StoredPreferences},
};

use super::AppState;

/// Largest candidate sample the catalog endpoint returns
const MAX_CATALOG_LIMIT: usize = 50;

// Request types

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: String,
    pub limit: Option<usize>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Store a user's preference profile
pub async fn put_preferences(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(username): Path<String>,
    Json(profile): Json<PreferenceProfile>,
) -> AppResult<Json<StoredPreferences>> {
    tracing::info!(
        request_id = %request_id,
        username = %username,
        category = ?profile.category(),
        "Storing preferences"
    );

    let stored = state.preferences.put(&username, profile).await?;
    Ok(Json(stored))
}

/// Get a user's stored preference profile
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<StoredPreferences>> {
    let stored = state
        .preferences
        .get(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No preferences stored for '{}'", username)))?;

    Ok(Json(stored))
}

/// Recommend a product from a user's stored preferences
pub async fn recommend_for_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(username): Path<String>,
) -> AppResult<Json<Recommendation>> {
    let stored = state
        .preferences
        .get(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No preferences stored for '{}'", username)))?;

    tracing::info!(
        request_id = %request_id,
        username = %username,
        "Processing recommendation request"
    );

    let recommendation = state.pipeline.recommend(&stored.profile).await?;
    Ok(Json(recommendation))
}

/// Recommend a product from a preference profile given in the request body
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(profile): Json<PreferenceProfile>,
) -> AppResult<Json<Recommendation>> {
    tracing::info!(
        request_id = %request_id,
        category = ?profile.category(),
        "Processing recommendation request"
    );

    let recommendation = state.pipeline.recommend(&profile).await?;

    tracing::info!(
        request_id = %request_id,
        product_id = %recommendation.entry().id,
        "Recommendation completed"
    );

    Ok(Json(recommendation))
}

/// List the candidates the pipeline would show the model for a category
pub async fn catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<CandidateSet>> {
    let limit = query
        .limit
        .unwrap_or(state.pipeline.settings().candidate_limit);

    if limit == 0 || limit > MAX_CATALOG_LIMIT {
        return Err(AppError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_CATALOG_LIMIT
        )));
    }

    let candidates = state.catalog.candidates_for(&query.category, limit).await?;
    Ok(Json(candidates))
}
