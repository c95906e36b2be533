//! Booking Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reserved table, as listed for the authenticated guest.
///
/// Bookings are created elsewhere; the client only ever loads and
/// cancels them. `restaurant_name` and `restaurant_image` are
/// denormalized display fields supplied by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub restaurant_name: String,
    /// Image URL; an empty string means no image is available.
    #[serde(default)]
    pub restaurant_image: String,
    /// Scheduled date and time of the reservation.
    pub date: DateTime<Utc>,
    pub party_size: u32,
}
