//! Epoch helpers used to derive time-based examples

use chrono::{DateTime, Utc};

/// Current time in whole epoch seconds
pub fn current_epoch() -> i64 {
    Utc::now().timestamp()
}

/// Render epoch seconds as `YYYY-MM-DD HH:MM:SSZ` (UTC)
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn epoch_to_str(epoch: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(epoch, 0).map(datetime_to_str)
}

/// Render a UTC datetime with a space separator and a `Z` offset
pub fn datetime_to_str(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%SZ").to_string()
}
