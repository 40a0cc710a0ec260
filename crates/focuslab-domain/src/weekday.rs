//! Day-of-week aggregation
//!
//! Weekdays are keyed by a fixed ordered list of English names rather than
//! an enum, so every serialized pattern carries the same seven keys.

use crate::metric::DailyMetric;
use chrono::{Datelike, NaiveDate};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Position of `date`'s weekday in [`WEEKDAY_NAMES`]
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// English name of `date`'s weekday (proleptic Gregorian)
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[weekday_index(date)]
}

/// Average focus blocks per weekday
///
/// Always holds all seven weekdays; a weekday with no observations is 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayOfWeekPattern([f64; 7]);

impl DayOfWeekPattern {
    /// Build a pattern from averages in [`WEEKDAY_NAMES`] order
    pub fn from_averages(averages: [f64; 7]) -> Self {
        Self(averages)
    }

    /// Average for a weekday name (case-insensitive); `None` for unknown names
    pub fn get(&self, name: &str) -> Option<f64> {
        position_of(name).map(|idx| self.0[idx])
    }

    /// Set the average for a weekday name; returns false for unknown names
    pub fn set(&mut self, name: &str, average: f64) -> bool {
        match position_of(name) {
            Some(idx) => {
                self.0[idx] = average;
                true
            }
            None => false,
        }
    }

    /// `(name, average)` pairs in Sunday..Saturday order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        WEEKDAY_NAMES.iter().copied().zip(self.0.iter().copied())
    }

    /// Highest average in the pattern
    pub fn max_average(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }
}

fn position_of(name: &str) -> Option<usize> {
    WEEKDAY_NAMES
        .iter()
        .position(|day| day.eq_ignore_ascii_case(name))
}

/// Group metrics by weekday and average `focus_blocks` per group
pub fn day_of_week_pattern<'a, I>(metrics: I) -> DayOfWeekPattern
where
    I: IntoIterator<Item = &'a DailyMetric>,
{
    let mut totals = [0.0_f64; 7];
    let mut counts = [0_u32; 7];

    for metric in metrics {
        let idx = weekday_index(metric.date);
        totals[idx] += metric.value();
        counts[idx] += 1;
    }

    let mut averages = [0.0_f64; 7];
    for (idx, average) in averages.iter_mut().enumerate() {
        if counts[idx] > 0 {
            *average = totals[idx] / f64::from(counts[idx]);
        }
    }

    DayOfWeekPattern(averages)
}

impl Serialize for DayOfWeekPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEKDAY_NAMES.len()))?;
        for (name, average) in self.iter() {
            map.serialize_entry(name, &average)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DayOfWeekPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PatternVisitor)
    }
}

struct PatternVisitor;

impl<'de> Visitor<'de> for PatternVisitor {
    type Value = DayOfWeekPattern;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map from weekday name to average focus blocks")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pattern = DayOfWeekPattern::default();
        while let Some((name, average)) = access.next_entry::<String, f64>()? {
            if !pattern.set(&name, average) {
                return Err(de::Error::custom(format!("unknown weekday: {}", name)));
            }
        }
        Ok(pattern)
    }
}
