use std::{
    fmt,
    ops::{Add, Sub},
};

use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Date, Duration, OffsetDateTime, Time, UtcOffset,
};

pub use time::error::Parse as ParseError;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]");
const TIME_FORMAT_WITH_SECONDS: &[FormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// A point in time with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        // Truncate to millisecond precision to survive a round trip through storage
        let truncated = now
            .replace_nanosecond(now.nanosecond() / 1_000_000 * 1_000_000)
            .unwrap_or(now);
        Self(truncated)
    }

    pub fn try_from_millis(millis: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .ok()
            .map(Self)
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    /// The calendar date of this point in time at the given offset.
    pub fn local_date(self, offset: UtcOffset) -> Date {
        self.0.to_offset(offset).date()
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;
    fn sub(self, rhs: Duration) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;
    fn sub(self, rhs: Timestamp) -> Self::Output {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

/// Parses an ISO 8601 calendar date, e.g. `2024-05-31`.
pub fn parse_date(s: &str) -> Result<Date, ParseError> {
    Date::parse(s.trim(), DATE_FORMAT)
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parses a wall clock time, either `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<Time, ParseError> {
    let s = s.trim();
    Time::parse(s, TIME_FORMAT).or_else(|_| Time::parse(s, TIME_FORMAT_WITH_SECONDS))
}

pub fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
