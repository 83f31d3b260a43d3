//! Frontier progress snapshots and derived counters.
//!
//! A frontier is a learning module a user can select and work through. The
//! storage layer returns one progress row per (user, frontier) pair; the
//! functions here compute the overall and per-category counters shown at
//! the top of the my-page view. Evaluation is done against pre-loaded data
//! passed in by the caller.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_NOT_STARTED: &str = "not_started";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_PAUSED: &str = "paused";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid frontier progress status strings.
pub const VALID_FRONTIER_STATUSES: &[&str] = &[
    STATUS_NOT_STARTED,
    STATUS_IN_PROGRESS,
    STATUS_PAUSED,
    STATUS_COMPLETED,
];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Progress status of a user on a single frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierStatus {
    NotStarted,
    InProgress,
    Paused,
    Completed,
}

impl FrontierStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_NOT_STARTED => Ok(Self::NotStarted),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_PAUSED => Ok(Self::Paused),
            STATUS_COMPLETED => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid frontier status '{s}'. Must be one of: {}",
                VALID_FRONTIER_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => STATUS_NOT_STARTED,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Paused => STATUS_PAUSED,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    /// Human-readable label for display.
    pub fn display_label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Read-only snapshot of a user's progress on one frontier.
#[derive(Debug, Clone, Serialize)]
pub struct FrontierProgress {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub status: FrontierStatus,
    pub start_time: Option<Timestamp>,
    pub completion_time: Option<Timestamp>,
}

/// Counters derived from the full frontier list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overall_pct: f64,
}

/// Completed/total pair for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProgress {
    pub category: String,
    pub total: usize,
    pub completed: usize,
}

// ---------------------------------------------------------------------------
// Evaluation functions
// ---------------------------------------------------------------------------

/// Completion percentage from total and completed counts.
///
/// Returns 0.0 when `total` is 0.
pub fn compute_progress_pct(total: usize, completed: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// Overall counters across all of a user's selected frontiers.
pub fn summarize_progress(frontiers: &[FrontierProgress]) -> ProgressSummary {
    let total = frontiers.len();
    let completed = frontiers
        .iter()
        .filter(|f| f.status == FrontierStatus::Completed)
        .count();
    let in_progress = frontiers
        .iter()
        .filter(|f| f.status == FrontierStatus::InProgress)
        .count();

    ProgressSummary {
        total,
        completed,
        in_progress,
        overall_pct: compute_progress_pct(total, completed),
    }
}

/// Completed/total pairs per category, in first-seen category order.
pub fn category_progress(frontiers: &[FrontierProgress]) -> Vec<CategoryProgress> {
    let mut by_category: IndexMap<&str, (usize, usize)> = IndexMap::new();

    for frontier in frontiers {
        let (total, completed) = by_category.entry(frontier.category.as_str()).or_insert((0, 0));
        *total += 1;
        if frontier.status == FrontierStatus::Completed {
            *completed += 1;
        }
    }

    by_category
        .into_iter()
        .map(|(category, (total, completed))| CategoryProgress {
            category: category.to_string(),
            total,
            completed,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn frontier(id: DbId, category: &str, status: FrontierStatus) -> FrontierProgress {
        FrontierProgress {
            id,
            name: format!("Frontier {id}"),
            category: category.to_string(),
            image_url: None,
            status,
            start_time: None,
            completion_time: None,
        }
    }

    // -- FrontierStatus -------------------------------------------------------

    #[test]
    fn status_from_str_round_trip() {
        for status in [
            FrontierStatus::NotStarted,
            FrontierStatus::InProgress,
            FrontierStatus::Paused,
            FrontierStatus::Completed,
        ] {
            assert_eq!(
                FrontierStatus::from_str_value(status.as_str()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn status_from_str_invalid() {
        let result = FrontierStatus::from_str_value("abandoned");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid frontier status"));
    }

    // -- compute_progress_pct -------------------------------------------------

    #[test]
    fn pct_zero_total_returns_zero() {
        assert_eq!(compute_progress_pct(0, 0), 0.0);
    }

    #[test]
    fn pct_all_completed_returns_100() {
        assert_eq!(compute_progress_pct(4, 4), 100.0);
    }

    #[test]
    fn pct_half_completed_returns_50() {
        assert_eq!(compute_progress_pct(4, 2), 50.0);
    }

    // -- summarize_progress ---------------------------------------------------

    #[test]
    fn summary_counts_by_status() {
        let frontiers = vec![
            frontier(1, "education", FrontierStatus::Completed),
            frontier(2, "education", FrontierStatus::InProgress),
            frontier(3, "environment", FrontierStatus::NotStarted),
            frontier(4, "environment", FrontierStatus::Paused),
        ];

        let summary = summarize_progress(&frontiers);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.overall_pct, 25.0);
    }

    #[test]
    fn summary_of_empty_list() {
        let summary = summarize_progress(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.in_progress, 0);
        assert_eq!(summary.overall_pct, 0.0);
    }

    // -- category_progress ----------------------------------------------------

    #[test]
    fn categories_keep_first_seen_order() {
        let frontiers = vec![
            frontier(1, "environment", FrontierStatus::Completed),
            frontier(2, "education", FrontierStatus::NotStarted),
            frontier(3, "environment", FrontierStatus::InProgress),
        ];

        let categories = category_progress(&frontiers);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category, "environment");
        assert_eq!(categories[0].total, 2);
        assert_eq!(categories[0].completed, 1);
        assert_eq!(categories[1].category, "education");
        assert_eq!(categories[1].total, 1);
        assert_eq!(categories[1].completed, 0);
    }

    #[test]
    fn category_progress_of_empty_list() {
        assert!(category_progress(&[]).is_empty());
    }
}
