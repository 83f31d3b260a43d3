//! Notification entity model.

use serde::Serialize;
use sqlx::FromRow;
use zouuu_core::types::{DbId, Timestamp};

/// A notification row joined with its sender's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub sender_id: DbId,
    pub sender_name: String,
    pub message: String,
    pub created_at: Timestamp,
}
