//! # Reference Moment
//!
//! The fixed "current date and time" that all future-dated validation
//! compares against.
//!
//! ## Why a Fixed Moment?
//! Date and time checks must be deterministic: a reservation accepted at
//! one prompt must still be accepted at the next. The book therefore never
//! reads the clock itself: it is handed one `ReferenceMoment` at
//! construction and measures every date/time against it for the whole
//! session.
//!
//! The date is kept as a zero-padded `YYYY-MM-DD` string so that plain
//! lexicographic comparison agrees with chronological order. No calendar
//! arithmetic happens here; this type is a comparison reference, not a
//! calendar.

use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Default session moment, used by `Default` and pinned by the test suite.
const DEFAULT_DATE: &str = "2025-05-19";
const DEFAULT_HOUR: u32 = 22;
const DEFAULT_MINUTE: u32 = 19;

/// The moment "now" was frozen at for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceMoment {
    /// Zero-padded `YYYY-MM-DD`.
    date: String,

    /// Hour of day, 0-23.
    hour: u32,

    /// Minute of hour, 0-59.
    minute: u32,
}

impl ReferenceMoment {
    /// Creates a moment from its parts. The date must already be
    /// zero-padded `YYYY-MM-DD`; nothing is re-validated here.
    pub fn new(date: impl Into<String>, hour: u32, minute: u32) -> Self {
        ReferenceMoment {
            date: date.into(),
            hour,
            minute,
        }
    }

    /// Captures the local wall clock as the session's reference moment.
    ///
    /// Called once at startup; the rest of the system only ever sees the
    /// frozen value.
    pub fn now() -> Self {
        let now = Local::now();
        ReferenceMoment {
            date: format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day()),
            hour: now.hour(),
            minute: now.minute(),
        }
    }

    /// The reference date, zero-padded `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The reference hour, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The reference minute, 0-59.
    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl Default for ReferenceMoment {
    fn default() -> Self {
        ReferenceMoment::new(DEFAULT_DATE, DEFAULT_HOUR, DEFAULT_MINUTE)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_moment() {
        let moment = ReferenceMoment::default();
        assert_eq!(moment.date(), "2025-05-19");
        assert_eq!(moment.hour(), 22);
        assert_eq!(moment.minute(), 19);
    }

    #[test]
    fn test_now_produces_comparable_date() {
        let moment = ReferenceMoment::now();
        let bytes = moment.date().as_bytes();
        assert_eq!(bytes.len(), 10);
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert!(moment.hour() < 24);
        assert!(moment.minute() < 60);
    }
}
