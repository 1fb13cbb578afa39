//! Error types for snapshot decoding.
//!
//! All of these are caller-contract violations, not runtime failures: the
//! persistence layer owns retries and I/O errors. Malformed temporal input
//! fails fast rather than producing a silently wrong classification;
//! structural issues the aggregator handles by exclusion (blank names) are
//! deliberately not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Invalid calendar date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid clock time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Malformed snapshot document: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SnapshotError {
    /// True when the error is a temporal precondition violation (bad date or
    /// time value) rather than unparseable JSON.
    pub fn is_temporal(&self) -> bool {
        matches!(self, SnapshotError::InvalidDate(_) | SnapshotError::InvalidTime(_))
    }
}
