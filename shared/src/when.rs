//! Date predicates and display formatting for bookings
//!
//! Pure functions of their arguments: "now" is always passed in
//! explicitly so callers and tests never depend on the wall clock.

use chrono::{DateTime, Utc};

/// Whether a booking scheduled at `date` may still be cancelled.
///
/// A booking exactly at `now` counts as cancellable; only strictly
/// past bookings lose the affordance.
pub fn is_cancellable(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date >= now
}

/// Long display date, e.g. "January 1, 2099".
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// 12-hour display time, e.g. "12:00 PM".
pub fn format_time(date: DateTime<Utc>) -> String {
    date.format("%I:%M %p").to_string()
}
