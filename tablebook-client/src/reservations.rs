//! Reservations API seam
//!
//! The injectable fetch boundary consumed by the booking-list
//! controller. `HttpClient` implements it against the live API; tests
//! substitute stubs.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::Booking;

/// Read and cancel operations on the caller's reservations
#[async_trait]
pub trait ReservationsApi: Send + Sync {
    /// List the caller's bookings, in server order
    async fn list_bookings(&self) -> ClientResult<Vec<Booking>>;

    /// Cancel the booking with the given id
    async fn cancel_booking(&self, id: i64) -> ClientResult<()>;
}

#[async_trait]
impl ReservationsApi for HttpClient {
    async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get("api/reservations").await
    }

    async fn cancel_booking(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("api/reservations/{}", id)).await
    }
}
