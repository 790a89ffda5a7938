//! Calendar arithmetic and comparisons on [`DateValue`].
//!
//! All functions here are stateless. Day, month and year shifts are
//! delegated to `chrono`; this module only validates inputs and chooses the
//! shift for a [`DateUnit`].

use chrono::{Days, Months, NaiveDateTime};
use dk_core::ensure;
use dk_core::errors::{Error, Result};
use tracing::debug;

use crate::date::DateValue;
use crate::time_unit::DateUnit;

/// The year of the current instant.
///
/// Honours the evaluation instant pinned in [`dk_core::Settings`].
pub fn current_year() -> i32 {
    DateValue::now().year()
}

/// Add `amount` units to `date`.
///
/// Fractional amounts are truncated toward zero. Month and year shifts clamp
/// the day to the end of the target month (Jan 31 + 1 month is the last day
/// of February); day shifts keep the time of day.
///
/// A [`DateUnit::Unrecognized`] unit returns `date` unchanged.
///
/// # Errors
/// * [`Error::InvalidArgument`] if `amount` is NaN or infinite.
/// * [`Error::InvalidArgument`] if the result leaves the representable
///   calendar range.
///
/// # Example
/// ```
/// use dk_time::{add_units, DateUnit, DateValue};
///
/// let d = DateValue::parse("2026-01-01").unwrap();
/// let r = add_units(d, 5.0, DateUnit::Days).unwrap();
/// assert_eq!(r.day(), 6);
/// assert_eq!(add_units(d, 1.0, "bananas").unwrap(), d);
/// ```
pub fn add_units(date: DateValue, amount: f64, unit: impl Into<DateUnit>) -> Result<DateValue> {
    let unit = unit.into();
    ensure!(
        amount.is_finite(),
        "amount must be a finite number, got {amount}"
    );
    let n = amount.trunc();

    let shifted = match unit {
        DateUnit::Days => shift_days(date.as_naive(), n),
        DateUnit::Months => shift_months(date.as_naive(), n),
        DateUnit::Years => shift_months(date.as_naive(), n * 12.0),
        DateUnit::Unrecognized => {
            debug!(%date, amount, "unrecognized unit, date left unchanged");
            return Ok(date);
        }
    };

    shifted.map(DateValue::from).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "adding {n} {unit} to {date} leaves the representable range"
        ))
    })
}

fn shift_days(dt: NaiveDateTime, n: f64) -> Option<NaiveDateTime> {
    if n.abs() > u64::MAX as f64 {
        return None;
    }
    let days = Days::new(n.abs() as u64);
    if n < 0.0 {
        dt.checked_sub_days(days)
    } else {
        dt.checked_add_days(days)
    }
}

fn shift_months(dt: NaiveDateTime, n: f64) -> Option<NaiveDateTime> {
    if n.abs() > u32::MAX as f64 {
        return None;
    }
    let months = Months::new(n.abs() as u32);
    if n < 0.0 {
        dt.checked_sub_months(months)
    } else {
        dt.checked_add_months(months)
    }
}

/// Return `true` iff `from <= date <= to`.
///
/// # Errors
/// [`Error::InvalidArgument`] if `from` is strictly after `to`.
pub fn is_within_range(date: DateValue, from: DateValue, to: DateValue) -> Result<bool> {
    ensure!(
        from <= to,
        "invalid range: from {from} must not be after to {to}"
    );
    Ok(from <= date && date <= to)
}

/// Return `true` iff `date` is strictly before `compare_date`.
pub fn is_before(date: DateValue, compare_date: DateValue) -> bool {
    date < compare_date
}

/// Return `true` iff both instants fall on the same calendar day.
///
/// Time of day is ignored; no timezone normalisation is applied.
pub fn is_same_day(date: DateValue, compare_date: DateValue) -> bool {
    date.calendar_day() == compare_date.calendar_day()
}
