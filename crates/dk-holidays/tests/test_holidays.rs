//! Integration tests for the holiday lookups.
//!
//! Time is paused in most tests, so the simulated round-trip completes
//! instantly while still being measurable through `tokio::time::Instant`.

use std::sync::Arc;
use std::time::Duration;

use dk_core::DEFAULT_HOLIDAY_LATENCY;
use dk_holidays::{
    get_holidays, holidays_from, is_holiday, is_holiday_with, FixedDateCalendar, HolidaySource,
};
use dk_time::DateValue;
use tokio::time::Instant;

fn date(s: &str) -> DateValue {
    DateValue::parse(s).unwrap()
}

#[tokio::test(start_paused = true)]
async fn holidays_for_a_year() {
    let holidays = get_holidays(2026).await.unwrap();
    assert_eq!(
        holidays,
        vec![date("2026-01-01"), date("2026-12-25"), date("2026-12-31")]
    );
}

#[tokio::test(start_paused = true)]
async fn holidays_follow_the_requested_year() {
    for year in [1900, 2024, 2199] {
        let holidays = get_holidays(year).await.unwrap();
        assert_eq!(holidays.len(), 3);
        assert!(holidays.iter().all(|d| d.year() == year));
    }
}

#[tokio::test(start_paused = true)]
async fn holiday_dates() {
    assert!(is_holiday(date("2026-12-25")).await.unwrap());
    assert!(is_holiday(date("2026-12-25T00:00")).await.unwrap());
    assert!(is_holiday(date("2026-12-31T23:59")).await.unwrap());
    assert!(is_holiday(date("1999-01-01T12:00")).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn ordinary_dates() {
    assert!(!is_holiday(date("2026-03-01")).await.unwrap());
    assert!(!is_holiday(date("2026-12-24T23:59")).await.unwrap());
    assert!(!is_holiday(date("2027-01-02")).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn unrepresentable_year_is_invalid_date() {
    assert!(get_holidays(i32::MAX).await.unwrap_err().is_invalid_date());
}

#[tokio::test(start_paused = true)]
async fn lookup_waits_for_the_simulated_round_trip() {
    let start = Instant::now();
    get_holidays(2026).await.unwrap();
    assert!(start.elapsed() >= DEFAULT_HOLIDAY_LATENCY);

    let start = Instant::now();
    is_holiday(date("2026-06-15")).await.unwrap();
    let elapsed = start.elapsed();
    // one round-trip, not one per holiday
    assert!(elapsed >= DEFAULT_HOLIDAY_LATENCY);
    assert!(elapsed < DEFAULT_HOLIDAY_LATENCY * 2);
}

#[tokio::test(start_paused = true)]
async fn concurrent_lookups_are_independent() {
    let start = Instant::now();
    let (a, b, c) = tokio::join!(
        get_holidays(2025),
        is_holiday(date("2026-12-25")),
        is_holiday(date("2026-07-01")),
    );
    assert_eq!(a.unwrap().len(), 3);
    assert!(b.unwrap());
    assert!(!c.unwrap());
    assert!(start.elapsed() < DEFAULT_HOLIDAY_LATENCY * 2);
}

#[tokio::test(start_paused = true)]
async fn fixed_latency_source() {
    let cal = FixedDateCalendar::standard().with_latency(Duration::from_secs(2));
    let start = Instant::now();
    let holidays = holidays_from(&cal, 2026).await.unwrap();
    assert_eq!(holidays.len(), 3);
    assert_eq!(holidays[1].name, "Christmas");
    assert!(start.elapsed() >= Duration::from_secs(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn lookups_can_be_spawned() {
    let cal: Arc<dyn HolidaySource> = Arc::new(FixedDateCalendar::standard().with_latency(Duration::ZERO));
    let handles: Vec<_> = ["2026-01-01", "2026-02-14", "2026-12-31"]
        .into_iter()
        .map(|s| {
            let cal = Arc::clone(&cal);
            let d = date(s);
            tokio::spawn(async move { is_holiday_with(cal.as_ref(), d).await })
        })
        .collect();

    let mut results = Vec::new();
    for h in handles {
        results.push(h.await.unwrap().unwrap());
    }
    assert_eq!(results, vec![true, false, true]);
}
