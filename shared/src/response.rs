//! API response types
//!
//! The reservations API returns payloads directly on success and a
//! structured error envelope on any non-success status.

use serde::{Deserialize, Serialize};

/// Error envelope returned with non-success HTTP statuses
///
/// ```json
/// { "error": "Cannot cancel within 2 hours" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message, shown to the user verbatim
    pub error: String,
}

impl ErrorBody {
    /// Create an error envelope
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
