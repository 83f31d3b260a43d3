//! Repository for booking requests and their candidate slots.

use sqlx::PgPool;
use zouuu_core::booking::SlotConfirmation;
use zouuu_core::types::DbId;

use crate::models::booking::BookingSlotRow;

/// Read access to a user's booking requests.
pub struct BookingRepo;

impl BookingRepo {
    /// List the flat booking/slot join rows for a user.
    ///
    /// Ordering: newest booking first, then slot date and start time
    /// ascending within a booking. The aggregator in `zouuu-core` relies
    /// on this row order and does not re-sort.
    pub async fn list_rows_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BookingSlotRow>, sqlx::Error> {
        let rows = sqlx::query_as::<_, BookingSlotRow>(
            "SELECT br.id AS booking_id, \
                    br.frontier_id, \
                    f.name AS frontier_name, \
                    f.category, \
                    f.image_url, \
                    br.status AS booking_status, \
                    br.created_at, \
                    br.user_message, \
                    br.admin_reply, \
                    brs.id AS slot_id, \
                    brs.date AS slot_date, \
                    brs.start_time AS slot_start_time, \
                    brs.end_time AS slot_end_time, \
                    brs.is_confirmed \
             FROM booking_requests br \
             JOIN frontiers f ON br.frontier_id = f.id \
             LEFT JOIN booking_request_slots brs ON br.id = brs.booking_request_id \
             WHERE br.user_id = $1 \
             ORDER BY br.created_at DESC, brs.date ASC, brs.start_time ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        // Flags outside the tri-state set are a data-integrity problem;
        // the reconciler absorbs them but they deserve a trace.
        for row in &rows {
            if let Some(flag) = row.is_confirmed {
                if SlotConfirmation::from_flag(flag).is_none() {
                    tracing::warn!(
                        booking_id = row.booking_id,
                        slot_id = ?row.slot_id,
                        flag,
                        "Slot confirmation flag outside the tri-state set"
                    );
                }
            }
        }

        Ok(rows)
    }
}
