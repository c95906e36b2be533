//! Shared types for the Tablebook reservation app
//!
//! Wire-level projections exchanged with the reservations API,
//! the error body envelope, and the pure date helpers used by rendering.

pub mod models;
pub mod response;
pub mod when;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Booking, Cuisine, Location, Price, Restaurant};
pub use response::ErrorBody;
