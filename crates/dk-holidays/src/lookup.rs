//! Holiday lookups.
//!
//! [`get_holidays`] and [`is_holiday`] query the stock
//! [`FixedDateCalendar::standard`] calendar; the `_from` / `_with` variants
//! take any [`HolidaySource`]. Every lookup is exactly one round-trip to the
//! source.

use dk_core::Result;
use dk_time::DateValue;
use tracing::trace;

use crate::calendar::FixedDateCalendar;
use crate::holiday::Holiday;
use crate::source::HolidaySource;

/// Fetch the holidays of `year` from `source`.
pub async fn holidays_from<S>(source: &S, year: i32) -> Result<Vec<Holiday>>
where
    S: HolidaySource + ?Sized,
{
    source.holidays(year).await
}

/// Return `true` if `date` falls on one of `source`'s holidays for the
/// year of `date`.
pub async fn is_holiday_with<S>(source: &S, date: DateValue) -> Result<bool>
where
    S: HolidaySource + ?Sized,
{
    let holidays = source.holidays(date.year()).await?;
    match holidays.iter().find(|h| h.falls_on(date)) {
        Some(h) => {
            trace!(source = source.name(), %date, holiday = %h.name, "date is a holiday");
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Fetch the holiday dates of `year`: January 1, December 25 and
/// December 31.
///
/// The lookup waits for the configured holiday latency (100 ms unless
/// changed in [`dk_core::Settings`]) before resolving.
///
/// # Errors
/// [`dk_core::Error::InvalidDate`] if `year` cannot be represented.
pub async fn get_holidays(year: i32) -> Result<Vec<DateValue>> {
    let holidays = holidays_from(&FixedDateCalendar::standard(), year).await?;
    Ok(holidays.into_iter().map(|h| h.date).collect())
}

/// Return `true` if `date` is January 1, December 25 or December 31 of its
/// year, at any time of day.
pub async fn is_holiday(date: DateValue) -> Result<bool> {
    is_holiday_with(&FixedDateCalendar::standard(), date).await
}
