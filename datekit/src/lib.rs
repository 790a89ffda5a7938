//! # datekit
//!
//! Date arithmetic helpers and holiday lookup.
//!
//! This crate is a **façade** over the `dk-*` workspace crates. It exposes the
//! seven helpers as one flat module, plus the underlying crates for callers
//! that need the types behind them.
//!
//! ## Quick start
//!
//! ```rust
//! use datekit::{add_units, is_same_day, DateUnit, DateValue};
//!
//! let d = DateValue::parse("2026-01-31").unwrap();
//! let next = add_units(d, 1.0, DateUnit::Months).unwrap();
//! assert!(is_same_day(next, DateValue::parse("2026-02-28T17:00").unwrap()));
//! ```
//!
//! Holiday lookups are `async` and expect a `tokio` runtime:
//!
//! ```rust,ignore
//! let christmas = DateValue::parse("2026-12-25")?;
//! assert!(datekit::is_holiday(christmas).await?);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and process-wide settings.
pub use dk_core as core;

/// `DateValue`, `DateUnit` and calendar arithmetic.
pub use dk_time as time;

/// Holiday sources and lookups.
pub use dk_holidays as holidays;

/// Logging bootstrap for applications and tests.
pub mod logging;

// ── Flat helper surface ───────────────────────────────────────────────────────

pub use dk_core::{Error, Result, ScopedEvaluationInstant, Settings};
pub use dk_holidays::{get_holidays, is_holiday, FixedDateCalendar, Holiday, HolidaySource};
pub use dk_time::{
    add_units, current_year, is_before, is_same_day, is_within_range, DateUnit, DateValue,
};
