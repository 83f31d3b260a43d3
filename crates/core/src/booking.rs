//! Experience-booking aggregation and overall-status reconciliation.
//!
//! The storage layer returns one flat row per (booking, slot) pair from a
//! left join, ordered by booking creation time and then slot date/time.
//! [`group_booking_rows`] folds those rows into one [`BookingRequest`] per
//! booking, preserving first-seen booking order and input slot order.
//! [`reconcile_overall_status`] collapses a booking's per-slot confirmation
//! flags into the single status shown to the user.

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;
use serde::Serialize;

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// `is_confirmed` flag value for a slot an administrator declined.
pub const FLAG_REJECTED: i16 = -1;

/// `is_confirmed` flag value for a slot still awaiting review.
pub const FLAG_PENDING: i16 = 0;

/// `is_confirmed` flag value for a slot an administrator confirmed.
pub const FLAG_CONFIRMED: i16 = 1;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Per-slot confirmation state, decoded from the tri-state database flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotConfirmation {
    Rejected,
    Pending,
    Confirmed,
}

impl SlotConfirmation {
    /// Decode a raw `is_confirmed` flag. Returns `None` for values outside
    /// {-1, 0, 1}, which callers should treat as a data-integrity warning.
    pub fn from_flag(flag: i16) -> Option<Self> {
        match flag {
            FLAG_REJECTED => Some(Self::Rejected),
            FLAG_PENDING => Some(Self::Pending),
            FLAG_CONFIRMED => Some(Self::Confirmed),
            _ => None,
        }
    }

    /// Encode back to the database flag value.
    pub fn as_flag(self) -> i16 {
        match self {
            Self::Rejected => FLAG_REJECTED,
            Self::Pending => FLAG_PENDING,
            Self::Confirmed => FLAG_CONFIRMED,
        }
    }

    /// Status string used in API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }
}

/// The single reconciled status shown to the user for a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Pending,
    Confirmed,
    Rejected,
    Unknown,
}

impl OverallStatus {
    /// Status string used in API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label. Pure presentation lookup; keep the branching
    /// logic in [`reconcile_overall_status`].
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Pending => "Awaiting review",
            Self::Confirmed => "Confirmed",
            Self::Rejected => "Declined",
            Self::Unknown => "Unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// One candidate date/time range attached to a booking request.
///
/// `confirmation` is `None` when the stored flag was outside the tri-state
/// set; the reconciler absorbs such slots into [`OverallStatus::Unknown`].
#[derive(Debug, Clone, Serialize)]
pub struct BookingSlot {
    pub slot_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub confirmation: Option<SlotConfirmation>,
}

/// A user's booking request with its ordered candidate slots.
///
/// Slots never outlive their booking in this view; a booking with zero
/// slots is valid (left-join miss) and keeps an empty list.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub booking_id: DbId,
    pub frontier_id: DbId,
    pub frontier_name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub booking_status: String,
    pub created_at: Timestamp,
    pub user_message: Option<String>,
    pub admin_reply: Option<String>,
    pub slots: Vec<BookingSlot>,
}

impl BookingRequest {
    /// The reconciled status across all of this booking's slots.
    pub fn overall_status(&self) -> OverallStatus {
        reconcile_overall_status(&self.slots)
    }
}

/// One flat row from the booking/slot left join.
///
/// The slot columns are all `None` for a booking without slots; a non-null
/// `slot_id` implies the other slot columns are present.
#[derive(Debug, Clone)]
pub struct BookingRow {
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

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Fold flat join rows into one [`BookingRequest`] per distinct booking id.
///
/// Output order is the first-seen order of booking ids in the input, which
/// the `IndexMap` guarantees regardless of how slot rows for different
/// bookings are interleaved. Slot order within a booking is input row order;
/// nothing is re-sorted and duplicate slot rows are appended as-is.
pub fn group_booking_rows(rows: Vec<BookingRow>) -> Vec<BookingRequest> {
    let mut grouped: IndexMap<DbId, BookingRequest> = IndexMap::new();

    for row in rows {
        let BookingRow {
            booking_id,
            frontier_id,
            frontier_name,
            category,
            image_url,
            booking_status,
            created_at,
            user_message,
            admin_reply,
            slot_id,
            slot_date,
            slot_start_time,
            slot_end_time,
            is_confirmed,
        } = row;

        let booking = grouped.entry(booking_id).or_insert_with(|| BookingRequest {
            booking_id,
            frontier_id,
            frontier_name,
            category,
            image_url,
            booking_status,
            created_at,
            user_message,
            admin_reply,
            slots: Vec::new(),
        });

        if let (Some(slot_id), Some(date), Some(start_time), Some(end_time)) =
            (slot_id, slot_date, slot_start_time, slot_end_time)
        {
            booking.slots.push(BookingSlot {
                slot_id,
                date,
                start_time,
                end_time,
                confirmation: is_confirmed.and_then(SlotConfirmation::from_flag),
            });
        }
    }

    grouped.into_values().collect()
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Derive the single overall status for a booking from its slot list.
///
/// Priority order over the full list:
/// 1. any pending slot wins, even when other slots are already confirmed or
///    rejected, so the booking keeps reading "awaiting review" until every
///    slot has been decided;
/// 2. otherwise any confirmed slot wins over rejections;
/// 3. otherwise `Rejected` only when every slot is rejected (strictly
///    `rejected == total`, not a majority rule);
/// 4. everything else, including the empty list, is `Unknown`.
pub fn reconcile_overall_status(slots: &[BookingSlot]) -> OverallStatus {
    let total = slots.len();
    let mut pending = 0usize;
    let mut confirmed = 0usize;
    let mut rejected = 0usize;

    for slot in slots {
        match slot.confirmation {
            Some(SlotConfirmation::Pending) => pending += 1,
            Some(SlotConfirmation::Confirmed) => confirmed += 1,
            Some(SlotConfirmation::Rejected) => rejected += 1,
            // Unrecognized flags count toward total only.
            None => {}
        }
    }

    if pending > 0 {
        OverallStatus::Pending
    } else if confirmed > 0 {
        OverallStatus::Confirmed
    } else if total > 0 && rejected == total {
        OverallStatus::Rejected
    } else {
        OverallStatus::Unknown
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slot(slot_id: DbId, flag: i16) -> BookingSlot {
        BookingSlot {
            slot_id,
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            confirmation: SlotConfirmation::from_flag(flag),
        }
    }

    fn row(booking_id: DbId, slot_id: Option<DbId>, flag: Option<i16>) -> BookingRow {
        BookingRow {
            booking_id,
            frontier_id: 7,
            frontier_name: "Community farming".to_string(),
            category: "environment".to_string(),
            image_url: None,
            booking_status: "submitted".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 8, 20, 9, 30, 0).unwrap(),
            user_message: None,
            admin_reply: None,
            slot_id,
            slot_date: slot_id.map(|_| NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()),
            slot_start_time: slot_id.map(|_| NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            slot_end_time: slot_id.map(|_| NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            is_confirmed: flag,
        }
    }

    // -- SlotConfirmation -----------------------------------------------------

    #[test]
    fn from_flag_decodes_tri_state() {
        assert_eq!(
            SlotConfirmation::from_flag(-1),
            Some(SlotConfirmation::Rejected)
        );
        assert_eq!(
            SlotConfirmation::from_flag(0),
            Some(SlotConfirmation::Pending)
        );
        assert_eq!(
            SlotConfirmation::from_flag(1),
            Some(SlotConfirmation::Confirmed)
        );
    }

    #[test]
    fn from_flag_rejects_out_of_range() {
        assert_eq!(SlotConfirmation::from_flag(2), None);
        assert_eq!(SlotConfirmation::from_flag(-2), None);
        assert_eq!(SlotConfirmation::from_flag(99), None);
    }

    #[test]
    fn flag_round_trip() {
        for flag in [FLAG_REJECTED, FLAG_PENDING, FLAG_CONFIRMED] {
            let decoded = SlotConfirmation::from_flag(flag).unwrap();
            assert_eq!(decoded.as_flag(), flag);
        }
    }

    // -- Reconciler -----------------------------------------------------------

    #[test]
    fn pending_wins_over_everything() {
        let slots = vec![slot(1, 1), slot(2, 0), slot(3, -1)];
        assert_eq!(reconcile_overall_status(&slots), OverallStatus::Pending);
    }

    #[test]
    fn single_pending_among_many_confirmed_stays_pending() {
        let slots = vec![slot(1, 1), slot(2, 1), slot(3, 1), slot(4, 0)];
        assert_eq!(reconcile_overall_status(&slots), OverallStatus::Pending);
    }

    #[test]
    fn confirmed_wins_over_rejected_when_nothing_pending() {
        let slots = vec![slot(1, -1), slot(2, 1)];
        assert_eq!(reconcile_overall_status(&slots), OverallStatus::Confirmed);
    }

    #[test]
    fn all_rejected_is_rejected() {
        let slots = vec![slot(1, -1), slot(2, -1)];
        assert_eq!(reconcile_overall_status(&slots), OverallStatus::Rejected);
    }

    #[test]
    fn empty_slot_list_is_unknown() {
        assert_eq!(reconcile_overall_status(&[]), OverallStatus::Unknown);
    }

    #[test]
    fn rejected_mixed_with_unrecognized_flag_is_unknown() {
        // Strict rejected == total rule: the unrecognized slot breaks it.
        let slots = vec![slot(1, -1), slot(2, 5)];
        assert_eq!(reconcile_overall_status(&slots), OverallStatus::Unknown);
    }

    #[test]
    fn only_unrecognized_flags_is_unknown() {
        let slots = vec![slot(1, 3), slot(2, -7)];
        assert_eq!(reconcile_overall_status(&slots), OverallStatus::Unknown);
    }

    #[test]
    fn display_label_mapping() {
        assert_eq!(OverallStatus::Confirmed.display_label(), "Confirmed");
        assert_eq!(OverallStatus::Rejected.display_label(), "Declined");
        assert_eq!(OverallStatus::Pending.display_label(), "Awaiting review");
        assert_eq!(OverallStatus::Unknown.display_label(), "Unknown");
    }

    // -- Aggregator -----------------------------------------------------------

    #[test]
    fn booking_without_slots_keeps_empty_list() {
        // Scenario: a single left-join miss row.
        let bookings = group_booking_rows(vec![row(1, None, None)]);

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].booking_id, 1);
        assert!(bookings[0].slots.is_empty());
        assert_eq!(bookings[0].overall_status(), OverallStatus::Unknown);
    }

    #[test]
    fn slots_group_under_their_booking() {
        let bookings = group_booking_rows(vec![
            row(1, Some(10), Some(0)),
            row(1, Some(11), Some(1)),
        ]);

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].slots.len(), 2);
        assert_eq!(bookings[0].slots[0].slot_id, 10);
        assert_eq!(bookings[0].slots[1].slot_id, 11);
        // One pending slot keeps the whole booking pending.
        assert_eq!(bookings[0].overall_status(), OverallStatus::Pending);
    }

    #[test]
    fn all_confirmed_booking_reconciles_confirmed() {
        let bookings = group_booking_rows(vec![
            row(1, Some(10), Some(1)),
            row(1, Some(11), Some(1)),
        ]);
        assert_eq!(bookings[0].overall_status(), OverallStatus::Confirmed);
    }

    #[test]
    fn single_rejected_slot_reconciles_rejected() {
        let bookings = group_booking_rows(vec![row(1, Some(10), Some(-1))]);
        assert_eq!(bookings[0].overall_status(), OverallStatus::Rejected);
    }

    #[test]
    fn first_seen_order_survives_interleaving() {
        // Booking 2 appears first; its second slot row arrives after
        // booking 1. Output must stay [2, 1].
        let bookings = group_booking_rows(vec![
            row(2, None, None),
            row(1, Some(4), Some(0)),
            row(2, Some(5), Some(1)),
        ]);

        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].booking_id, 2);
        assert_eq!(bookings[1].booking_id, 1);
        assert_eq!(bookings[0].slots.len(), 1);
        assert_eq!(bookings[0].slots[0].slot_id, 5);
    }

    #[test]
    fn output_length_matches_distinct_booking_ids() {
        let bookings = group_booking_rows(vec![
            row(3, Some(1), Some(0)),
            row(8, Some(2), Some(0)),
            row(3, Some(3), Some(1)),
            row(5, None, None),
            row(8, Some(4), Some(-1)),
        ]);

        let ids: Vec<DbId> = bookings.iter().map(|b| b.booking_id).collect();
        assert_eq!(ids, vec![3, 8, 5]);
    }

    #[test]
    fn duplicate_slot_rows_are_not_deduplicated() {
        // Matches upstream behavior: duplicates pass through untouched.
        let bookings = group_booking_rows(vec![
            row(1, Some(10), Some(1)),
            row(1, Some(10), Some(1)),
        ]);

        assert_eq!(bookings[0].slots.len(), 2);
        assert_eq!(bookings[0].slots[0].slot_id, 10);
        assert_eq!(bookings[0].slots[1].slot_id, 10);
    }

    #[test]
    fn slot_order_follows_input_rows() {
        let bookings = group_booking_rows(vec![
            row(1, Some(30), Some(0)),
            row(1, Some(10), Some(0)),
            row(1, Some(20), Some(0)),
        ]);

        let ids: Vec<DbId> = bookings[0].slots.iter().map(|s| s.slot_id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn booking_fields_come_from_first_row() {
        let mut first = row(1, None, None);
        first.booking_status = "submitted".to_string();
        let mut second = row(1, Some(9), Some(0));
        second.booking_status = "something-else".to_string();

        let bookings = group_booking_rows(vec![first, second]);
        assert_eq!(bookings[0].booking_status, "submitted");
    }
}
