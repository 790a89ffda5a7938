//! `HolidaySource` trait.
//!
//! A source answers "which days of `year` are holidays?" in one round-trip.
//! Today the only implementation is the in-process
//! [`FixedDateCalendar`](crate::calendar::FixedDateCalendar); a remote
//! backend can implement the same trait without changing any caller.

use async_trait::async_trait;
use dk_core::Result;

use crate::holiday::Holiday;

/// An asynchronous provider of holidays.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch every holiday of `year`, sorted by date.
    ///
    /// # Errors
    /// [`dk_core::Error::InvalidDate`] if `year` cannot be represented.
    async fn holidays(&self, year: i32) -> Result<Vec<Holiday>>;

    /// Name of this source (used in logging).
    fn name(&self) -> &str {
        "HolidaySource"
    }
}
