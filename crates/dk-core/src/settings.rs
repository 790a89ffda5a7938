//! Process-wide library settings.
//!
//! [`Settings`] holds the **evaluation instant** (the instant treated as
//! "now") and the latency of the stock holiday source. It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: each setting sits behind its own `Mutex` so it can be
//! changed from any thread. Tests that pin the evaluation instant should use
//! [`ScopedEvaluationInstant`] so the previous value is restored.

use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Duration;

use chrono::NaiveDateTime;

/// Default simulated round-trip of the stock holiday source.
pub const DEFAULT_HOLIDAY_LATENCY: Duration = Duration::from_millis(100);

/// Process-wide settings used by datekit.
pub struct Settings {
    evaluation_instant: Mutex<Option<NaiveDateTime>>,
    holiday_latency: Mutex<Duration>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

// Settings are plain values, so a poisoned lock still guards valid data.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_instant: Mutex::new(None),
            holiday_latency: Mutex::new(DEFAULT_HOLIDAY_LATENCY),
        })
    }

    /// Return the pinned evaluation instant.
    ///
    /// Returns `None` if no evaluation instant has been set, in which case
    /// the local clock is "now".
    pub fn evaluation_instant(&self) -> Option<NaiveDateTime> {
        *lock(&self.evaluation_instant)
    }

    /// Pin the evaluation instant.
    pub fn set_evaluation_instant(&self, instant: NaiveDateTime) {
        *lock(&self.evaluation_instant) = Some(instant);
    }

    /// Clear the evaluation instant, resetting it to "use the local clock".
    pub fn reset_evaluation_instant(&self) {
        *lock(&self.evaluation_instant) = None;
    }

    /// Simulated round-trip of the stock holiday source.
    pub fn holiday_latency(&self) -> Duration {
        *lock(&self.holiday_latency)
    }

    /// Change the simulated round-trip of the stock holiday source.
    pub fn set_holiday_latency(&self, latency: Duration) {
        *lock(&self.holiday_latency) = latency;
    }

    fn replace_evaluation_instant(&self, instant: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
        std::mem::replace(&mut *lock(&self.evaluation_instant), instant)
    }
}

/// Pins the evaluation instant until dropped, then restores whatever was
/// set before.
///
/// ```
/// use chrono::NaiveDate;
/// use dk_core::{ScopedEvaluationInstant, Settings};
///
/// let pinned = NaiveDate::from_ymd_opt(2026, 6, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// {
///     let _guard = ScopedEvaluationInstant::new(pinned);
///     assert_eq!(Settings::instance().evaluation_instant(), Some(pinned));
/// }
/// assert_eq!(Settings::instance().evaluation_instant(), None);
/// ```
#[must_use = "the evaluation instant is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationInstant {
    previous: Option<NaiveDateTime>,
}

impl ScopedEvaluationInstant {
    /// Pin `instant` as the evaluation instant for the guard's lifetime.
    pub fn new(instant: NaiveDateTime) -> Self {
        let previous = Settings::instance().replace_evaluation_instant(Some(instant));
        Self { previous }
    }
}

impl Drop for ScopedEvaluationInstant {
    fn drop(&mut self) {
        Settings::instance().replace_evaluation_instant(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn scoped_instant_nests_and_restores() {
        let settings = Settings::instance();
        assert_eq!(settings.evaluation_instant(), None);

        let outer = NaiveDate::from_ymd_opt(2026, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let inner = NaiveDate::from_ymd_opt(1999, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();

        let g1 = ScopedEvaluationInstant::new(outer);
        {
            let _g2 = ScopedEvaluationInstant::new(inner);
            assert_eq!(settings.evaluation_instant(), Some(inner));
        }
        assert_eq!(settings.evaluation_instant(), Some(outer));
        drop(g1);
        assert_eq!(settings.evaluation_instant(), None);

        settings.set_evaluation_instant(inner);
        assert_eq!(settings.evaluation_instant(), Some(inner));
        settings.reset_evaluation_instant();
        assert_eq!(settings.evaluation_instant(), None);
    }

    #[test]
    fn holiday_latency_round_trip() {
        let settings = Settings::instance();
        assert_eq!(settings.holiday_latency(), DEFAULT_HOLIDAY_LATENCY);
        settings.set_holiday_latency(Duration::from_millis(5));
        assert_eq!(settings.holiday_latency(), Duration::from_millis(5));
        settings.set_holiday_latency(DEFAULT_HOLIDAY_LATENCY);
    }
}
