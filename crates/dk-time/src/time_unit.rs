//! `DateUnit` — the unit tag selecting what [`add_units`] advances by.
//!
//! [`add_units`]: crate::arithmetic::add_units

use std::str::FromStr;

/// A calendar unit used by [`add_units`](crate::arithmetic::add_units).
///
/// Tags usually arrive from configuration or user input as text, so any
/// string converts into a `DateUnit`: exactly `"days"`, `"months"` and
/// `"years"` map to their variants and everything else (including other
/// spellings or casings) becomes [`DateUnit::Unrecognized`], for which
/// `add_units` leaves the date unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateUnit {
    /// Calendar days.
    #[default]
    Days,
    /// Calendar months; the day is clamped to the end of the target month.
    Months,
    /// Calendar years (12 months).
    Years,
    /// Any tag other than the three above.
    Unrecognized,
}

impl DateUnit {
    /// The canonical lower-case tag (`"days"`, `"months"`, `"years"`).
    pub fn tag(self) -> &'static str {
        match self {
            DateUnit::Days => "days",
            DateUnit::Months => "months",
            DateUnit::Years => "years",
            DateUnit::Unrecognized => "unrecognized",
        }
    }
}

impl From<&str> for DateUnit {
    fn from(tag: &str) -> Self {
        // exact, case-sensitive tags only
        match tag {
            "days" => DateUnit::Days,
            "months" => DateUnit::Months,
            "years" => DateUnit::Years,
            _ => DateUnit::Unrecognized,
        }
    }
}

impl FromStr for DateUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DateUnit::from(s))
    }
}

impl std::fmt::Display for DateUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
