pub mod auth;
pub mod health;
pub mod mypage;
pub mod notification;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /mypage/progress                     frontier progress + counters (GET)
/// /mypage/bookings                     grouped bookings + statuses (GET)
///
/// /notifications                       list (?limit=)
///
/// /user/profile                        get, update (auth required)
/// /user/theme                          update theme selection (PUT)
/// /user/reflection/{field}             save one reflection section (PUT)
/// /user/presentation                   save presentation URL (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // My-page view data (progress, bookings).
        .nest("/mypage", mypage::router())
        // Notifications addressed to the user.
        .nest("/notifications", notification::router())
        // Profile, theme, and reflection edits.
        .nest("/user", user::router())
}
