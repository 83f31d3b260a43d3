//! Route definitions for the `/user` resource (profile, theme, reflections).
//!
//! All endpoints require authentication.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET  /profile            -> get_profile
/// PUT  /profile            -> update_profile
/// PUT  /theme              -> update_theme
/// PUT  /reflection/{field} -> save_reflection
/// PUT  /presentation       -> save_presentation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/theme", put(profile::update_theme))
        .route("/reflection/{field}", put(profile::save_reflection))
        .route("/presentation", put(profile::save_presentation))
}
