//! Handlers for the my-page view data.
//!
//! Two read-only endpoints back the page: frontier progress (with overall
//! and per-category counters) and booking requests (grouped from the flat
//! join rows, each with its reconciled overall status). All endpoints
//! require authentication via [`AuthUser`].

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use zouuu_core::booking::{group_booking_rows, BookingRequest, BookingSlot};
use zouuu_core::frontier::{
    category_progress, summarize_progress, CategoryProgress, FrontierProgress, ProgressSummary,
};
use zouuu_core::types::{DbId, Timestamp};
use zouuu_db::repositories::{BookingRepo, FrontierProgressRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Progress response types
// ---------------------------------------------------------------------------

/// A single frontier card on the my-page.
#[derive(Debug, Serialize)]
pub struct FrontierProgressItem {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub status: String,
    pub status_label: String,
    pub start_time: Option<Timestamp>,
    pub completion_time: Option<Timestamp>,
}

/// Full payload for the progress section.
#[derive(Debug, Serialize)]
pub struct ProgressData {
    pub summary: ProgressSummary,
    pub categories: Vec<CategoryProgress>,
    pub frontiers: Vec<FrontierProgressItem>,
}

// ---------------------------------------------------------------------------
// Booking response types
// ---------------------------------------------------------------------------

/// One candidate slot line under a booking card.
#[derive(Debug, Serialize)]
pub struct SlotItem {
    pub slot_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
}

/// A booking card with its reconciled overall status.
#[derive(Debug, Serialize)]
pub struct BookingItem {
    pub booking_id: DbId,
    pub frontier_id: DbId,
    pub frontier_name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub booking_status: String,
    pub created_at: Timestamp,
    pub user_message: Option<String>,
    pub admin_reply: Option<String>,
    pub overall_status: String,
    pub overall_status_label: String,
    pub slots: Vec<SlotItem>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/mypage/progress
///
/// Returns the user's selected frontiers (active work first) with the
/// derived overall and per-category counters.
pub async fn progress(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = FrontierProgressRepo::list_for_user(&state.pool, auth.user_id).await?;
    let frontiers: Vec<FrontierProgress> = rows.into_iter().map(Into::into).collect();

    let summary = summarize_progress(&frontiers);
    let categories = category_progress(&frontiers);

    let items: Vec<FrontierProgressItem> = frontiers
        .into_iter()
        .map(|f| FrontierProgressItem {
            id: f.id,
            name: f.name,
            category: f.category,
            image_url: f.image_url,
            status: f.status.as_str().to_string(),
            status_label: f.status.display_label().to_string(),
            start_time: f.start_time,
            completion_time: f.completion_time,
        })
        .collect();

    Ok(Json(DataResponse {
        data: ProgressData {
            summary,
            categories,
            frontiers: items,
        },
    }))
}

/// GET /api/v1/mypage/bookings
///
/// Returns the user's booking requests, newest first, each carrying its
/// ordered candidate slots and the single reconciled overall status.
pub async fn bookings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = BookingRepo::list_rows_for_user(&state.pool, auth.user_id).await?;

    let grouped = group_booking_rows(rows.into_iter().map(Into::into).collect());

    let items: Vec<BookingItem> = grouped.into_iter().map(booking_to_item).collect();

    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn booking_to_item(booking: BookingRequest) -> BookingItem {
    let overall = booking.overall_status();

    BookingItem {
        booking_id: booking.booking_id,
        frontier_id: booking.frontier_id,
        frontier_name: booking.frontier_name,
        category: booking.category,
        image_url: booking.image_url,
        booking_status: booking.booking_status,
        created_at: booking.created_at,
        user_message: booking.user_message,
        admin_reply: booking.admin_reply,
        overall_status: overall.as_str().to_string(),
        overall_status_label: overall.display_label().to_string(),
        slots: booking.slots.into_iter().map(slot_to_item).collect(),
    }
}

fn slot_to_item(slot: BookingSlot) -> SlotItem {
    SlotItem {
        slot_id: slot.slot_id,
        date: slot.date,
        start_time: slot.start_time,
        end_time: slot.end_time,
        status: slot
            .confirmation
            .map(|c| c.as_str())
            .unwrap_or("unknown")
            .to_string(),
    }
}
