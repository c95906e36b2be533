//! Booking list controller
//!
//! State machine behind the "my reservations" view: one-shot load,
//! confirmation-gated cancellation, and dismissable success/error
//! banners. The controller owns plain state; [`BookingList::view`]
//! projects it into a renderable snapshot for a given "now".

use crate::{ClientError, ReservationsApi};
use chrono::{DateTime, Utc};
use shared::{when, Booking};

const LOAD_FALLBACK: &str = "Failed to load bookings";
const CANCEL_FALLBACK: &str = "Failed to cancel booking";
const CANCEL_SUCCESS: &str = "Reservation cancelled successfully.";

/// Overall list phase
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    /// Initial fetch still outstanding
    Loading,
    /// Initial fetch failed; the list was never populated
    Failed(String),
    /// List populated (possibly empty)
    Ready,
}

/// Controller state for the caller's booking list.
///
/// Bookings enter only through [`load`](Self::load) and leave only
/// through a successful cancel; they are never mutated in place. The
/// list keeps the server's order. Exclusive `&mut self` across each
/// await point means at most one mutation is ever outstanding.
#[derive(Debug)]
pub struct BookingList {
    bookings: Vec<Booking>,
    phase: Phase,
    error: Option<String>,
    success: Option<String>,
    /// Single pending-confirmation target; at most one booking may
    /// await confirmation at a time.
    confirm: Option<i64>,
}

impl BookingList {
    /// Create a controller in the loading phase
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            phase: Phase::Loading,
            error: None,
            success: None,
            confirm: None,
        }
    }

    /// One-shot initial fetch of the caller's bookings.
    ///
    /// Success replaces the whole list; failure records the
    /// server-provided message (or a generic fallback) as the load
    /// failure. Both arms leave the loading phase.
    pub async fn load<A: ReservationsApi + ?Sized>(&mut self, api: &A) {
        match api.list_bookings().await {
            Ok(bookings) => {
                self.bookings = bookings;
                self.phase = Phase::Ready;
            }
            Err(err) => {
                tracing::warn!("failed to load bookings: {}", err);
                let message = err.server_message().unwrap_or(LOAD_FALLBACK);
                self.phase = Phase::Failed(message.to_string());
            }
        }
    }

    /// Select a booking for cancellation, pending confirmation.
    ///
    /// No network call. Selecting a second booking supersedes the
    /// first; ids not present in the list are ignored.
    pub fn request_cancel(&mut self, id: i64) {
        if self.bookings.iter().any(|b| b.id == id) {
            self.confirm = Some(id);
        }
    }

    /// Dismiss the pending confirmation without cancelling
    pub fn decline_cancel(&mut self) {
        self.confirm = None;
    }

    /// Cancel the booking currently pending confirmation.
    ///
    /// No-op when nothing is pending. Stale banners are cleared before
    /// the request. A `NotFound` reply means the booking was already
    /// removed upstream and counts as success (idempotent delete). On
    /// any other failure the list is left untouched. The pending
    /// target is cleared on every path.
    pub async fn confirm_cancel<A: ReservationsApi + ?Sized>(&mut self, api: &A) {
        let Some(id) = self.confirm.take() else {
            return;
        };
        self.error = None;
        self.success = None;

        match api.cancel_booking(id).await {
            Ok(()) | Err(ClientError::NotFound(_)) => {
                self.bookings.retain(|b| b.id != id);
                self.success = Some(CANCEL_SUCCESS.to_string());
            }
            Err(err) => {
                tracing::warn!("failed to cancel booking {}: {}", id, err);
                let message = err.server_message().unwrap_or(CANCEL_FALLBACK);
                self.error = Some(message.to_string());
            }
        }
    }

    /// Dismiss the error banner; no-op when none is shown.
    ///
    /// Dismissing a load failure drops through to the empty list, the
    /// same place the original view lands; a failed load never traps
    /// the user.
    pub fn dismiss_error(&mut self) {
        self.error = None;
        if matches!(self.phase, Phase::Failed(_)) {
            self.phase = Phase::Ready;
        }
    }

    /// Dismiss the success banner; no-op when none is shown
    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    /// Bookings currently held, in server order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Id of the booking awaiting cancellation confirmation, if any
    pub fn pending_confirmation(&self) -> Option<i64> {
        self.confirm
    }

    /// Project the state into a renderable snapshot.
    ///
    /// `now` decides which bookings still show a cancel affordance;
    /// it is a parameter so rendering stays a pure function.
    pub fn view(&self, now: DateTime<Utc>) -> ListView {
        match &self.phase {
            Phase::Loading => ListView::Loading,
            Phase::Failed(message) => ListView::LoadFailed {
                message: message.clone(),
            },
            Phase::Ready if self.bookings.is_empty() => ListView::Empty,
            Phase::Ready => ListView::Bookings {
                success: self.success.clone(),
                error: self.error.clone(),
                cards: self.bookings.iter().map(|b| self.card(b, now)).collect(),
            },
        }
    }

    fn card(&self, booking: &Booking, now: DateTime<Utc>) -> BookingCard {
        BookingCard {
            id: booking.id,
            restaurant_name: booking.restaurant_name.clone(),
            image: (!booking.restaurant_image.is_empty())
                .then(|| booking.restaurant_image.clone()),
            date_text: when::format_date(booking.date),
            time_text: when::format_time(booking.date),
            party_size: booking.party_size,
            can_cancel: when::is_cancellable(booking.date, now),
            awaiting_confirmation: self.confirm == Some(booking.id),
        }
    }
}

impl Default for BookingList {
    fn default() -> Self {
        Self::new()
    }
}

/// Renderable snapshot of the booking list
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Progress indicator only; no list, no banners
    Loading,
    /// Initial load failed; dismissable message, no list
    LoadFailed { message: String },
    /// Loaded with no bookings
    Empty,
    /// Loaded list with optional banners
    Bookings {
        success: Option<String>,
        error: Option<String>,
        cards: Vec<BookingCard>,
    },
}

/// One booking, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCard {
    pub id: i64,
    pub restaurant_name: String,
    /// `None` renders the no-image placeholder
    pub image: Option<String>,
    /// e.g. "January 1, 2099"
    pub date_text: String,
    /// e.g. "12:00 PM"
    pub time_text: String,
    pub party_size: u32,
    /// Whether the cancel affordance is shown at all
    pub can_cancel: bool,
    /// Whether the confirmation dialog overlays this card
    pub awaiting_confirmation: bool,
}
