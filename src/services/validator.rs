//! Acceptance window for incoming transactions
//!
//! A transaction is accepted when its timestamp lies in `[now - 60s, now]`.
//! Both bounds are inclusive.

use chrono::{DateTime, Duration, Utc};

/// Maximum age, in seconds, a transaction may have when it is received
pub const STALENESS_THRESHOLD_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Older than the staleness threshold
    #[error("Transaction expired")]
    Expired,
    /// Dated in the future
    #[error("Transaction timestamp is in the future")]
    InvalidTimestamp,
}

pub fn staleness_threshold() -> Duration {
    Duration::seconds(STALENESS_THRESHOLD_SECS)
}

/// Check a candidate timestamp against server time `now`
pub fn validate(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), ValidationError> {
    if now.signed_duration_since(timestamp) > staleness_threshold() {
        return Err(ValidationError::Expired);
    }

    if timestamp.signed_duration_since(now) > Duration::zero() {
        return Err(ValidationError::InvalidTimestamp);
    }

    Ok(())
}
