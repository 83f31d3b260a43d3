//! Entity model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, the request DTOs for that entity, and conversions into the
//! database-free `zouuu-core` types where the core logic consumes them.

pub mod booking;
pub mod frontier;
pub mod notification;
pub mod session;
pub mod user;
