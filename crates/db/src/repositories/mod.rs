//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod frontier_progress_repo;
pub mod notification_repo;
pub mod session_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use frontier_progress_repo::FrontierProgressRepo;
pub use notification_repo::NotificationRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
