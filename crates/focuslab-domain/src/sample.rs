//! Sample baseline data for trying the tool without a week of logging

use crate::metric::{DailyMetric, MetricSource};
use crate::weekday::weekday_index;
use crate::window::BASELINE_DAYS;
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Typical focus blocks for a weekday index (Sunday = 0)
///
/// Mondays are meeting-heavy, Fridays wind down, weekends are light.
fn typical_blocks(weekday: usize) -> i64 {
    match weekday {
        0 | 6 => 1,
        1 | 5 => 2,
        _ => 3,
    }
}

/// Generate a baseline week ending the day before `today`
///
/// Each day gets its weekday's typical count plus a variance of -1 or 0,
/// floored at 0.
pub fn generate_sample_baseline<R: Rng + ?Sized>(
    today: NaiveDate,
    rng: &mut R,
) -> Vec<DailyMetric> {
    (1..=BASELINE_DAYS)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            let variance: i64 = rng.gen_range(-1..=0);
            let blocks = (typical_blocks(weekday_index(date)) + variance).max(0);
            DailyMetric::new(date, blocks as u32, MetricSource::Sample)
        })
        .collect()
}

/// Add samples whose dates are not already covered by `existing`
///
/// Returns the number of samples added.
pub fn import_samples(existing: &mut Vec<DailyMetric>, samples: Vec<DailyMetric>) -> usize {
    let mut added = 0;
    for sample in samples {
        if existing.iter().all(|m| m.date != sample.date) {
            existing.push(sample);
            added += 1;
        }
    }
    added
}
