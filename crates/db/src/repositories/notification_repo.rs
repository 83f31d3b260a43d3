//! Repository for the `notifications` table.

use sqlx::PgPool;
use zouuu_core::types::DbId;

use crate::models::notification::Notification;

/// Read access to notifications addressed to a user.
pub struct NotificationRepo;

impl NotificationRepo {
    /// List a user's notifications with sender names, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            "SELECT n.id, n.sender_id, u.name AS sender_name, n.message, n.created_at \
             FROM notifications n \
             JOIN notification_recipients nr ON n.id = nr.notification_id \
             JOIN users u ON n.sender_id = u.id \
             WHERE nr.user_id = $1 \
             ORDER BY n.created_at DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
