//! Fixed-date holiday calendar.
//!
//! A [`FixedDateCalendar`] holds holidays that fall on the same month and
//! day every year (New Year's Day, Christmas, ...). It answers lookups in
//! process, optionally after a simulated round-trip so that callers behave
//! the same as they would against a remote source.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use dk_core::errors::Result;
use dk_core::{invalid_date, Settings};
use dk_time::DateValue;
use tracing::debug;

use crate::holiday::Holiday;
use crate::source::HolidaySource;

// Leap year used to validate (month, day) entries, so Feb 29 is accepted.
const LEAP_YEAR: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Latency {
    Fixed(Duration),
    Configured,
}

/// A calendar of holidays recurring on fixed month/day pairs.
#[derive(Debug, Clone)]
pub struct FixedDateCalendar {
    name: String,
    entries: BTreeMap<(u32, u32), String>,
    latency: Latency,
}

impl FixedDateCalendar {
    /// Create a new calendar with the given name, no holidays and no
    /// simulated latency.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
            latency: Latency::Fixed(Duration::ZERO),
        }
    }

    /// The stock calendar: New Year's Day, Christmas and New Year's Eve.
    ///
    /// Its simulated round-trip is read from
    /// [`Settings::holiday_latency`] on every lookup.
    pub fn standard() -> Self {
        let mut cal = Self::new("Standard");
        cal.latency = Latency::Configured;
        for (month, day, name) in [
            (1, 1, "New Year's Day"),
            (12, 25, "Christmas"),
            (12, 31, "New Year's Eve"),
        ] {
            cal.entries.insert((month, day), name.to_owned());
        }
        cal
    }

    /// Use a fixed simulated round-trip for every lookup.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Latency::Fixed(latency);
        self
    }

    /// The simulated round-trip applied by the next lookup.
    pub fn latency(&self) -> Duration {
        match self.latency {
            Latency::Fixed(d) => d,
            Latency::Configured => Settings::instance().holiday_latency(),
        }
    }

    /// Add a holiday on `month`/`day` of every year. An existing holiday on
    /// the same day is renamed.
    ///
    /// February 29 is accepted and only observed in leap years.
    ///
    /// # Errors
    /// [`dk_core::Error::InvalidDate`] if `month`/`day` is not a day of any
    /// year.
    pub fn add_holiday(&mut self, month: u32, day: u32, name: impl Into<String>) -> Result<()> {
        if NaiveDate::from_ymd_opt(LEAP_YEAR, month, day).is_none() {
            invalid_date!("{month:02}-{day:02} is not a day of the year");
        }
        self.entries.insert((month, day), name.into());
        Ok(())
    }

    /// Remove the holiday on `month`/`day`. Returns `true` if one existed.
    pub fn remove_holiday(&mut self, month: u32, day: u32) -> bool {
        self.entries.remove(&(month, day)).is_some()
    }

    /// Return the number of month/day entries.
    pub fn holiday_count(&self) -> usize {
        self.entries.len()
    }

    /// Resolve the entries against `year`, without any simulated latency.
    ///
    /// # Errors
    /// [`dk_core::Error::InvalidDate`] if `year` cannot be represented.
    pub fn holidays_in(&self, year: i32) -> Result<Vec<Holiday>> {
        if NaiveDate::from_ymd_opt(year, 1, 1).is_none()
            || NaiveDate::from_ymd_opt(year, 12, 31).is_none()
        {
            invalid_date!("year {year} is outside the supported calendar range");
        }
        Ok(self
            .entries
            .iter()
            .filter_map(|(&(month, day), name)| {
                NaiveDate::from_ymd_opt(year, month, day)
                    .map(|d| Holiday::new(DateValue::from(d), name.clone()))
            })
            .collect())
    }
}

impl Default for FixedDateCalendar {
    fn default() -> Self {
        Self::standard()
    }
}

#[async_trait]
impl HolidaySource for FixedDateCalendar {
    async fn holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let holidays = self.holidays_in(year)?;
        let latency = self.latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        debug!(
            source = %self.name,
            year,
            count = holidays.len(),
            latency_ms = latency.as_millis() as u64,
            "fetched holidays"
        );
        Ok(holidays)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> DateValue {
        DateValue::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn standard_has_three_entries() {
        let cal = FixedDateCalendar::standard();
        assert_eq!(cal.name(), "Standard");
        assert_eq!(cal.holiday_count(), 3);
        let dates: Vec<_> = cal
            .holidays_in(2026)
            .unwrap()
            .into_iter()
            .map(|h| h.date)
            .collect();
        assert_eq!(
            dates,
            vec![date(2026, 1, 1), date(2026, 12, 25), date(2026, 12, 31)]
        );
    }

    #[test]
    fn add_and_remove_holiday() {
        let mut cal = FixedDateCalendar::new("Custom");
        assert_eq!(cal.holiday_count(), 0);
        assert_eq!(cal.latency(), Duration::ZERO);

        cal.add_holiday(7, 4, "Independence Day").unwrap();
        cal.add_holiday(7, 4, "Fourth of July").unwrap();
        assert_eq!(cal.holiday_count(), 1);
        assert_eq!(cal.holidays_in(2026).unwrap()[0].name, "Fourth of July");

        assert!(cal.remove_holiday(7, 4));
        assert!(!cal.remove_holiday(7, 4));
        assert!(cal.holidays_in(2026).unwrap().is_empty());
    }

    #[test]
    fn rejects_impossible_days() {
        let mut cal = FixedDateCalendar::new("Custom");
        assert!(cal.add_holiday(2, 30, "nope").unwrap_err().is_invalid_date());
        assert!(cal.add_holiday(13, 1, "nope").unwrap_err().is_invalid_date());
        assert!(cal.add_holiday(0, 1, "nope").unwrap_err().is_invalid_date());
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        let mut cal = FixedDateCalendar::new("Leap");
        cal.add_holiday(2, 29, "Leap Day").unwrap();
        assert_eq!(cal.holidays_in(2024).unwrap().len(), 1);
        assert!(cal.holidays_in(2026).unwrap().is_empty());
    }

    #[test]
    fn unrepresentable_year() {
        let cal = FixedDateCalendar::standard();
        assert!(cal.holidays_in(i32::MAX).unwrap_err().is_invalid_date());
        assert!(cal.holidays_in(i32::MIN).unwrap_err().is_invalid_date());
    }

    #[test]
    fn fixed_latency_overrides_settings() {
        let cal = FixedDateCalendar::standard().with_latency(Duration::from_millis(7));
        assert_eq!(cal.latency(), Duration::from_millis(7));
    }
}
