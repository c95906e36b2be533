//! Data models
//!
//! Client-visible projections of the reservations API.
//! All IDs are `i64`; timestamps are `DateTime<Utc>`.

pub mod booking;
pub mod restaurant;

// Re-exports
pub use booking::*;
pub use restaurant::*;
