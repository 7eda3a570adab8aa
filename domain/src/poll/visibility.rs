//! Publication window rules for questions.
//!
//! Both functions are pure: callers supply `now` so the rule can be
//! evaluated against a fixed clock in tests and against the request time
//! in production.

use chrono::{DateTime, Duration, Utc};

/// Length of the "recently published" window, in days.
pub const RECENT_WINDOW_DAYS: i64 = 1;

/// A question is published once its publication time is at or before `now`.
pub fn is_published(now: DateTime<Utc>, pub_date: DateTime<Utc>) -> bool {
    pub_date <= now
}

/// Published within the last [`RECENT_WINDOW_DAYS`], both ends inclusive.
///
/// Future publication dates are never recent.
pub fn was_published_recently(now: DateTime<Utc>, pub_date: DateTime<Utc>) -> bool {
    now - Duration::days(RECENT_WINDOW_DAYS) <= pub_date && pub_date <= now
}
