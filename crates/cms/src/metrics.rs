//! Mock real-time dashboard metrics.
//!
//! There is no aggregation endpoint yet; the dashboard shows a bounded
//! random walk over a fixed baseline, advanced once per poll of the
//! metrics fragment. The walk state lives behind a mutex in app state -
//! no background timer, nothing to leak when the page is left.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

/// Days of history in the dashboard chart series.
const SERIES_DAYS: i64 = 30;

/// Headline dashboard numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub total_orders: u64,
    pub new_customers: u64,
    pub orders_change: f64,
    pub customers_change: f64,
    pub new_orders: u64,
    pub orders_on_hold: u64,
    pub out_of_stock: u64,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            total_orders: 16_247,
            new_customers: 356,
            orders_change: -6.8,
            customers_change: 26.5,
            new_orders: 57,
            orders_on_hold: 5,
            out_of_stock: 15,
        }
    }
}

impl MetricsSnapshot {
    /// Advance the walk one tick.
    ///
    /// The counters only ever grow; the gauges jitter inside fixed bands.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.total_orders += rng.random_range(0..10);
        self.new_customers += rng.random_range(0..3);
        self.new_orders = rng.random_range(40..60);
        self.orders_on_hold = rng.random_range(2..12);
        self.out_of_stock = rng.random_range(10..35);
    }
}

/// One day of the mock chart series.
#[derive(Debug, Clone, Serialize)]
pub struct DayPoint {
    pub date: String,
    pub sales: u64,
    pub customers: u64,
    pub orders: u64,
}

/// Generate a fresh 30-day series ending at `today`.
#[must_use]
pub fn random_series<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<DayPoint> {
    (0..SERIES_DAYS)
        .map(|offset| {
            let date = today - Duration::days(SERIES_DAYS - 1 - offset);
            DayPoint {
                date: date.format("%Y-%m-%d").to_string(),
                sales: rng.random_range(1_000..6_000),
                customers: rng.random_range(20..120),
                orders: rng.random_range(50..250),
            }
        })
        .collect()
}

/// Dashboard metric state shared behind a mutex in app state.
#[derive(Debug, Clone)]
pub struct MetricsState {
    pub snapshot: MetricsSnapshot,
    pub series: Vec<DayPoint>,
}

impl MetricsState {
    /// Seed the baseline snapshot and an initial chart series.
    #[must_use]
    pub fn seed<R: Rng>(rng: &mut R, today: NaiveDate) -> Self {
        Self {
            snapshot: MetricsSnapshot::default(),
            series: random_series(rng, today),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_values() {
        let snapshot = MetricsSnapshot::default();
        assert_eq!(snapshot.total_orders, 16_247);
        assert_eq!(snapshot.new_customers, 356);
        assert!((snapshot.orders_change - -6.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_step_counters_never_decrease() {
        let mut rng = rand::rng();
        let mut snapshot = MetricsSnapshot::default();
        for _ in 0..100 {
            let (orders_before, customers_before) =
                (snapshot.total_orders, snapshot.new_customers);
            snapshot.step(&mut rng);
            assert!(snapshot.total_orders >= orders_before);
            assert!(snapshot.new_customers >= customers_before);
        }
    }

    #[test]
    fn test_step_gauges_stay_in_band() {
        let mut rng = rand::rng();
        let mut snapshot = MetricsSnapshot::default();
        for _ in 0..100 {
            snapshot.step(&mut rng);
            assert!((40..60).contains(&snapshot.new_orders));
            assert!((2..12).contains(&snapshot.orders_on_hold));
            assert!((10..35).contains(&snapshot.out_of_stock));
        }
    }

    #[test]
    fn test_series_spans_thirty_consecutive_days() {
        let mut rng = rand::rng();
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let series = random_series(&mut rng, today);

        assert_eq!(series.len(), 30);
        assert_eq!(series.first().unwrap().date, "2025-06-01");
        assert_eq!(series.last().unwrap().date, "2025-06-30");
        for point in &series {
            assert!((1_000..6_000).contains(&point.sales));
            assert!((20..120).contains(&point.customers));
            assert!((50..250).contains(&point.orders));
        }
    }
}
