//! `Holiday` — a date flagged as a fixed calendar event.

use dk_time::DateValue;

/// A non-working day on the calendar of some year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Holiday {
    /// Midnight of the holiday.
    pub date: DateValue,
    /// Human readable name (e.g. `"Christmas"`).
    pub name: String,
}

impl Holiday {
    /// Create a new holiday.
    pub fn new(date: DateValue, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }

    /// Return `true` if `date` falls on this holiday's calendar day.
    pub fn falls_on(&self, date: DateValue) -> bool {
        dk_time::is_same_day(self.date, date)
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.date.calendar_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_on_ignores_time() {
        let xmas = Holiday::new(DateValue::from_ymd(2026, 12, 25).unwrap(), "Christmas");
        assert!(xmas.falls_on(DateValue::parse("2026-12-25T18:30").unwrap()));
        assert!(!xmas.falls_on(DateValue::parse("2025-12-25").unwrap()));
        assert_eq!(xmas.to_string(), "Christmas (2026-12-25)");
    }
}
