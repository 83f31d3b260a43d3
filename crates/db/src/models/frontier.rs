//! Frontier progress row model.

use sqlx::FromRow;
use zouuu_core::frontier::{FrontierProgress, FrontierStatus};
use zouuu_core::types::{DbId, Timestamp};

/// One row from the frontier/progress join for a single user.
#[derive(Debug, Clone, FromRow)]
pub struct FrontierProgressRow {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub status: String,
    pub start_time: Option<Timestamp>,
    pub completion_time: Option<Timestamp>,
}

impl From<FrontierProgressRow> for FrontierProgress {
    fn from(row: FrontierProgressRow) -> Self {
        // An unrecognized status string is a data-integrity problem in the
        // progress table, not a reason to fail the page.
        let status = FrontierStatus::from_str_value(&row.status).unwrap_or_else(|_| {
            tracing::warn!(
                frontier_id = row.id,
                status = %row.status,
                "Unrecognized frontier status, treating as not_started"
            );
            FrontierStatus::NotStarted
        });

        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            image_url: row.image_url,
            status,
            start_time: row.start_time,
            completion_time: row.completion_time,
        }
    }
}
