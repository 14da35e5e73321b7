//! Timestamps and clocks.
//!
//! Interaction times are validated [`Timestamp`] values: instants at or
//! after the Unix epoch. Strings are accepted either as RFC 3339 instants or
//! as `YYYY-MM-DD` calendar dates, which resolve to midnight UTC.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated instant at or after the Unix epoch.
///
/// # Examples
/// ```
/// use eventhub_core::Timestamp;
///
/// let day = Timestamp::parse("2025-04-01")?;
/// let instant = Timestamp::parse("2025-04-01T00:00:00Z")?;
/// assert_eq!(day, instant);
/// assert!(Timestamp::from_unix_seconds(-1).is_err());
/// # Ok::<(), eventhub_core::TimestampError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Timestamp(DateTime<Utc>);

/// Errors raised while validating timestamps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    /// The instant precedes the Unix epoch.
    #[error("timestamp {seconds}s is before the Unix epoch")]
    Negative {
        /// Offending offset from the epoch in seconds.
        seconds: i64,
    },
    /// The instant cannot be represented.
    #[error("timestamp {seconds}s is outside the supported range")]
    OutOfRange {
        /// Offending offset from the epoch in seconds.
        seconds: i64,
    },
    /// The string is neither RFC 3339 nor a `YYYY-MM-DD` date.
    #[error("'{input}' is not an RFC 3339 timestamp or YYYY-MM-DD date")]
    Malformed {
        /// Rejected input.
        input: String,
    },
}

impl Timestamp {
    /// Build a timestamp from whole seconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns [`TimestampError::Negative`] for negative input and
    /// [`TimestampError::OutOfRange`] when chrono cannot represent it.
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, TimestampError> {
        if seconds < 0 {
            return Err(TimestampError::Negative { seconds });
        }
        DateTime::from_timestamp(seconds, 0)
            .map(Self)
            .ok_or(TimestampError::OutOfRange { seconds })
    }

    /// Wrap a chrono instant, rejecting anything before the epoch.
    ///
    /// # Errors
    /// Returns [`TimestampError::Negative`] for pre-epoch instants.
    pub fn from_datetime(instant: DateTime<Utc>) -> Result<Self, TimestampError> {
        let seconds = instant.timestamp();
        if seconds < 0 {
            return Err(TimestampError::Negative { seconds });
        }
        Ok(Self(instant))
    }

    /// Parse an RFC 3339 instant or a `YYYY-MM-DD` date.
    ///
    /// # Errors
    /// Returns [`TimestampError::Malformed`] when neither format matches and
    /// [`TimestampError::Negative`] for pre-epoch values.
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        let trimmed = input.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::from_datetime(instant.with_timezone(&Utc));
        }
        let midnight = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| TimestampError::Malformed {
                input: input.to_owned(),
            })?;
        Self::from_datetime(midnight.and_utc())
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub fn unix_seconds(self) -> i64 {
        self.0.timestamp()
    }

    /// The underlying chrono instant.
    #[must_use]
    pub const fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.to_string()
    }
}

/// Source of the current time.
///
/// Implementations must be thread-safe so a model can be shared across
/// request handlers.
pub trait Clock: Send + Sync {
    /// Return the current instant.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp(Utc::now())
    }
}

/// A clock frozen at one instant, for reproducible runs.
///
/// # Examples
/// ```
/// use eventhub_core::{Clock, FixedClock, Timestamp};
///
/// let now = Timestamp::parse("2025-04-15")?;
/// assert_eq!(FixedClock::new(now).now(), now);
/// # Ok::<(), eventhub_core::TimestampError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    /// Freeze the clock at `now`.
    #[must_use]
    pub const fn new(now: Timestamp) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2025-04-01", 1_743_465_600)]
    #[case("2025-04-01T00:00:00Z", 1_743_465_600)]
    #[case("2025-04-01T02:00:00+02:00", 1_743_465_600)]
    #[case("1970-01-01", 0)]
    fn parses_supported_formats(#[case] input: &str, #[case] expected: i64) {
        let parsed = Timestamp::parse(input).expect("valid timestamp");
        assert_eq!(parsed.unix_seconds(), expected);
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2025-13-01")]
    #[case("")]
    fn rejects_malformed_strings(#[case] input: &str) {
        let err = Timestamp::parse(input).expect_err("malformed input");
        assert!(matches!(err, TimestampError::Malformed { .. }));
    }

    #[rstest]
    fn rejects_pre_epoch_dates() {
        let err = Timestamp::parse("1969-12-31").expect_err("pre-epoch date");
        assert_eq!(err, TimestampError::Negative { seconds: -86_400 });
    }

    #[rstest]
    fn rejects_negative_seconds() {
        assert_eq!(
            Timestamp::from_unix_seconds(-5),
            Err(TimestampError::Negative { seconds: -5 })
        );
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        let original = Timestamp::from_unix_seconds(1_743_465_600).expect("valid seconds");
        let reparsed = Timestamp::parse(&original.to_string()).expect("reparse");
        assert_eq!(original, reparsed);
    }
}
