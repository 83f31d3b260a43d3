//! Database-free domain logic for the ZOUUU learning portal.
//!
//! Everything in this crate operates on pre-loaded data passed in by the
//! caller: booking-row grouping, overall-status reconciliation, frontier
//! progress summarization, and the validation helpers shared by the DB and
//! API layers. No sqlx, no HTTP.

pub mod booking;
pub mod error;
pub mod frontier;
pub mod reflection;
pub mod registration;
pub mod themes;
pub mod types;
