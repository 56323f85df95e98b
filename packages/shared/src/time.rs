//! Clock abstraction and JST formatting.
//!
//! Timestamps are Unix epoch milliseconds. They are only rendered in JST
//! when shown to humans (debug endpoint, logs).

use chrono::{FixedOffset, TimeZone, Utc};

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Source of the current time, injectable for tests.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

/// Render epoch milliseconds as an RFC 3339 string in JST (`+09:00`).
///
/// Out-of-range inputs fall back to the Unix epoch rather than panicking.
pub fn millis_to_jst_rfc3339(millis: i64) -> String {
    let jst = FixedOffset::east_opt(JST_OFFSET_SECS).expect("JST offset is within bounds");
    let utc = Utc.timestamp_millis_opt(millis).single().unwrap_or_default();
    utc.with_timezone(&jst).to_rfc3339()
}
