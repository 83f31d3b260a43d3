//! Repository for the frontier/progress join.

use sqlx::PgPool;
use zouuu_core::frontier::{STATUS_IN_PROGRESS, STATUS_NOT_STARTED};
use zouuu_core::types::DbId;

use crate::models::frontier::FrontierProgressRow;

/// Read access to a user's selected frontiers with their progress.
pub struct FrontierProgressRepo;

impl FrontierProgressRepo {
    /// List a user's selected frontiers, active work first.
    ///
    /// Ordering: in-progress, then not-started, then everything else;
    /// most recently started first within each group.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<FrontierProgressRow>, sqlx::Error> {
        sqlx::query_as::<_, FrontierProgressRow>(
            "SELECT f.id, f.name, f.category, f.image_url, \
                    ufp.status, ufp.start_time, ufp.completion_time \
             FROM frontiers f \
             JOIN user_frontier_progress ufp ON f.id = ufp.frontier_id \
             WHERE ufp.user_id = $1 \
             ORDER BY CASE WHEN ufp.status = $2 THEN 1 \
                           WHEN ufp.status = $3 THEN 2 \
                           ELSE 3 END, \
                      ufp.start_time DESC",
        )
        .bind(user_id)
        .bind(STATUS_IN_PROGRESS)
        .bind(STATUS_NOT_STARTED)
        .fetch_all(pool)
        .await
    }
}
