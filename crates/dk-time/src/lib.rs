//! # dk-time
//!
//! The `DateValue` type, the `DateUnit` tag, and the calendar arithmetic
//! built on them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Adding units, range membership, and day/instant comparisons.
pub mod arithmetic;

/// `DateValue` type.
pub mod date;

/// `DateUnit` — days, months, years.
pub mod time_unit;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use arithmetic::{add_units, current_year, is_before, is_same_day, is_within_range};
pub use date::DateValue;
pub use time_unit::DateUnit;
