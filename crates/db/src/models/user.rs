//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use zouuu_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`ProfileResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub theme: Option<String>,
    pub inquiry_content: Option<String>,
    pub hypothesis: Option<String>,
    pub learning_report: Option<String>,
    pub factor_analysis: Option<String>,
    pub summary: Option<String>,
    pub presentation_url: Option<String>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub theme: Option<String>,
    pub inquiry_content: Option<String>,
    pub hypothesis: Option<String>,
    pub learning_report: Option<String>,
    pub factor_analysis: Option<String>,
    pub summary: Option<String>,
    pub presentation_url: Option<String>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            theme: user.theme,
            inquiry_content: user.inquiry_content,
            hypothesis: user.hypothesis,
            learning_report: user.learning_report,
            factor_analysis: user.factor_analysis,
            summary: user.summary,
            presentation_url: user.presentation_url,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// DTO for updating profile basics. Both fields are required; the edit
/// form always submits name and email together.
#[derive(Debug)]
pub struct UpdateProfile {
    pub name: String,
    pub email: String,
}
