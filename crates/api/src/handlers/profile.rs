//! Handlers for the `/user` resource (profile, theme, reflections).
//!
//! Each section of the my-page saves independently: profile basics (name +
//! email), the theme selection, one reflection field per request, and the
//! presentation material URL. All endpoints require authentication via
//! [`AuthUser`].

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use zouuu_core::error::CoreError;
use zouuu_core::reflection::{
    validate_presentation_url, validate_reflection_content, ReflectionField,
};
use zouuu_core::registration::{validate_email, validate_name};
use zouuu_core::themes::validate_theme;
use zouuu_db::models::user::{ProfileResponse, UpdateProfile};
use zouuu_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /user/profile`.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

/// Request body for `PUT /user/theme`.
#[derive(Debug, Deserialize)]
pub struct UpdateThemeRequest {
    pub theme: String,
}

/// Request body for `PUT /user/reflection/{field}`.
#[derive(Debug, Deserialize)]
pub struct SaveReflectionRequest {
    pub content: String,
}

/// Request body for `PUT /user/presentation`.
#[derive(Debug, Deserialize)]
pub struct SavePresentationRequest {
    pub presentation_url: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/user/profile
///
/// Returns the authenticated user's profile, including theme, reflection
/// sections, and presentation URL.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    Ok(Json(DataResponse {
        data: ProfileResponse::from(user),
    }))
}

/// PUT /api/v1/user/profile
///
/// Update profile basics (name + email). A duplicate email maps to 409 via
/// the `uq_users_email` constraint.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_email(&input.email).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let update_dto = UpdateProfile {
        name: input.name,
        email: input.email,
    };

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(DataResponse {
        data: ProfileResponse::from(user),
    }))
}

/// PUT /api/v1/user/theme
///
/// Update the user's theme selection. The theme must be one of the fixed
/// catalogue values.
pub async fn update_theme(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateThemeRequest>,
) -> AppResult<impl IntoResponse> {
    validate_theme(&input.theme).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let user = UserRepo::update_theme(&state.pool, auth.user_id, &input.theme)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, theme = %input.theme, "Theme updated");

    Ok(Json(DataResponse {
        data: ProfileResponse::from(user),
    }))
}

/// PUT /api/v1/user/reflection/{field}
///
/// Save one reflection section. The path segment names the field
/// (`inquiry_content`, `hypothesis`, `learning_report`, `factor_analysis`,
/// or `summary`); empty content clears the section.
pub async fn save_reflection(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(field): Path<String>,
    Json(input): Json<SaveReflectionRequest>,
) -> AppResult<impl IntoResponse> {
    let field = ReflectionField::from_str_value(&field)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_reflection_content(&input.content)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let user = UserRepo::update_reflection(&state.pool, auth.user_id, field, &input.content)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, field = field.as_str(), "Reflection saved");

    Ok(Json(DataResponse {
        data: ProfileResponse::from(user),
    }))
}

/// PUT /api/v1/user/presentation
///
/// Save the presentation material URL (a slides/document link).
pub async fn save_presentation(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SavePresentationRequest>,
) -> AppResult<impl IntoResponse> {
    validate_presentation_url(&input.presentation_url)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let user =
        UserRepo::update_presentation_url(&state.pool, auth.user_id, &input.presentation_url)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth.user_id,
            }))?;

    tracing::info!(user_id = auth.user_id, "Presentation URL saved");

    Ok(Json(DataResponse {
        data: ProfileResponse::from(user),
    }))
}
