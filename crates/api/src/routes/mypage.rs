//! Route definitions for the my-page view data.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::mypage;
use crate::state::AppState;

/// Routes mounted at `/mypage`.
///
/// ```text
/// GET /progress -> progress
/// GET /bookings -> bookings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/progress", get(mypage::progress))
        .route("/bookings", get(mypage::bookings))
}
