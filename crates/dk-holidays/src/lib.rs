//! # dk-holidays
//!
//! Asynchronous holiday lookup: the [`HolidaySource`] seam, the in-process
//! [`FixedDateCalendar`], and the lookups built on them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Fixed month/day holiday calendar.
pub mod calendar;

/// `Holiday` type.
pub mod holiday;

/// Holiday lookups against the stock calendar or any source.
pub mod lookup;

/// `HolidaySource` trait.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::FixedDateCalendar;
pub use holiday::Holiday;
pub use lookup::{get_holidays, holidays_from, is_holiday, is_holiday_with};
pub use source::HolidaySource;
