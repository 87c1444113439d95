//! Profile CRUD handlers.
//!
//! Request bodies are `ProfileDraft` JSON; the id always comes from the path
//! or from the server.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use recipebox_core::profile::{validate_draft, Profile, ProfileDraft};

use crate::{handlers::AppError, state::AppState};

/// List all profiles (GET /api/profiles).
pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, AppError> {
    let profiles = state.profiles.list().await?;
    Ok(Json(profiles))
}

/// Create a new profile (POST /api/profiles).
pub async fn create_profile(
    State(state): State<AppState>,
    Json(draft): Json<ProfileDraft>,
) -> Result<impl IntoResponse, AppError> {
    validate_draft(&draft)?;

    let profile = state.profiles.insert(draft).await?;

    tracing::info!(profile_id = %profile.id, email = %profile.email, "Created new profile");

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Get a single profile by ID (GET /api/profiles/{id}).
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, axum::response::Response> {
    state
        .profiles
        .get(&id)
        .await
        .map_err(|e| AppError::from(e).into_response())?
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// Replace a profile by ID (PUT /api/profiles/{id}).
///
/// Never creates: an unknown id is a 404 and leaves the table untouched.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ProfileDraft>,
) -> Result<Json<Profile>, axum::response::Response> {
    validate_draft(&draft).map_err(|e| AppError::from(e).into_response())?;

    let profile = state
        .profiles
        .update(&id, &draft)
        .await
        .map_err(|e| AppError::from(e).into_response())?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(profile_id = %id, "Updated profile");

    Ok(Json(profile))
}

/// Delete a profile by ID (DELETE /api/profiles/{id}).
///
/// Responds with the deleted record.
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, axum::response::Response> {
    let profile = state
        .profiles
        .delete(&id)
        .await
        .map_err(|e| AppError::from(e).into_response())?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(profile_id = %id, "Deleted profile");

    Ok(Json(profile))
}

fn not_found(id: &str) -> axum::response::Response {
    tracing::debug!(profile_id = %id, "Profile not found");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": format!("Profile not found: {id}") })),
    )
        .into_response()
}
