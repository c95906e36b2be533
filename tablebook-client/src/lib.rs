//! Tablebook Client - HTTP client and list controller for the reservations API
//!
//! Provides the network calls to the reservations API, the restaurant
//! detail lookup, and the booking-list state machine behind the
//! "my reservations" view.

pub mod bookings;
pub mod config;
pub mod error;
pub mod http;
pub mod reservations;
pub mod restaurants;

pub use bookings::{BookingCard, BookingList, ListView};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use reservations::ReservationsApi;
pub use restaurants::{CachedDirectory, Lookup, RestaurantDirectory};

// Re-export shared types for convenience
pub use shared::{Booking, ErrorBody, Restaurant};
