//! Booking request / slot join row model.

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;
use zouuu_core::booking::BookingRow;
use zouuu_core::types::{DbId, Timestamp};

/// One flat row from the booking/slot left join.
///
/// Slot columns are nullable: a booking without slots produces a single
/// row with every `slot_*` column (and `is_confirmed`) null.
#[derive(Debug, Clone, FromRow)]
pub struct BookingSlotRow {
    pub booking_id: DbId,
    pub frontier_id: DbId,
    pub frontier_name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub booking_status: String,
    pub created_at: Timestamp,
    pub user_message: Option<String>,
    pub admin_reply: Option<String>,
    pub slot_id: Option<DbId>,
    pub slot_date: Option<NaiveDate>,
    pub slot_start_time: Option<NaiveTime>,
    pub slot_end_time: Option<NaiveTime>,
    pub is_confirmed: Option<i16>,
}

impl From<BookingSlotRow> for BookingRow {
    fn from(row: BookingSlotRow) -> Self {
        Self {
            booking_id: row.booking_id,
            frontier_id: row.frontier_id,
            frontier_name: row.frontier_name,
            category: row.category,
            image_url: row.image_url,
            booking_status: row.booking_status,
            created_at: row.created_at,
            user_message: row.user_message,
            admin_reply: row.admin_reply,
            slot_id: row.slot_id,
            slot_date: row.slot_date,
            slot_start_time: row.slot_start_time,
            slot_end_time: row.slot_end_time,
            is_confirmed: row.is_confirmed,
        }
    }
}
