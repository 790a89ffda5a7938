//! `DateValue` type.
//!
//! A `DateValue` is an instant on the local calendar: a year/month/day plus a
//! time of day, with no attached timezone. Calendar math is delegated to
//! [`chrono`]; this type only decides how instants are built, parsed and
//! projected to calendar days.
//!
//! # Accepted text formats
//! * `YYYY-MM-DD` (midnight)
//! * `YYYY-MM-DDTHH:MM`
//! * `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds
//!
//! A space may be used instead of the `T` separator.

use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use dk_core::errors::{Error, Result};
use dk_core::{invalid_date, Settings};

/// An instant with calendar fields (year, month, day, time of day).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(NaiveDateTime);

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl DateValue {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Midnight of the given calendar day (month 1–12, day 1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// The given calendar day at `hour:minute:second`.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            invalid_date!("{year:04}-{month:02}-{day:02} is not a calendar day");
        };
        let Some(time) = NaiveTime::from_hms_opt(hour, minute, second) else {
            invalid_date!("{hour:02}:{minute:02}:{second:02} is not a time of day");
        };
        Ok(DateValue(date.and_time(time)))
    }

    /// Parse one of the accepted text formats (see the module docs).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if `s` matches none of them or names a
    /// day that does not exist.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            invalid_date!("empty date string");
        }
        for fmt in DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(DateValue(dt));
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => Ok(DateValue(d.and_time(NaiveTime::MIN))),
            Err(e) => Err(Error::InvalidDate(format!("cannot parse {s:?}: {e}"))),
        }
    }

    /// The current instant.
    ///
    /// Honours the evaluation instant pinned in [`Settings`]; otherwise reads
    /// the local clock.
    pub fn now() -> Self {
        match Settings::instance().evaluation_instant() {
            Some(pinned) => DateValue(pinned),
            None => DateValue(Local::now().naive_local()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The time of day.
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// The calendar day this instant falls on, time of day dropped.
    pub fn calendar_day(&self) -> NaiveDate {
        self.0.date()
    }

    /// This instant moved to midnight of its calendar day.
    pub fn start_of_day(&self) -> Self {
        DateValue(self.0.date().and_time(NaiveTime::MIN))
    }

    /// The underlying `chrono` value.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDateTime> for DateValue {
    fn from(dt: NaiveDateTime) -> Self {
        DateValue(dt)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        DateValue(d.and_time(NaiveTime::MIN))
    }
}

impl From<DateValue> for NaiveDateTime {
    fn from(d: DateValue) -> Self {
        d.0
    }
}

impl FromStr for DateValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DateValue::parse(s)
    }
}

impl TryFrom<&str> for DateValue {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        DateValue::parse(s)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for DateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = self.0.time();
        if t.second() == 0 && t.nanosecond() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
        }
    }
}

impl std::fmt::Debug for DateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateValue({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
