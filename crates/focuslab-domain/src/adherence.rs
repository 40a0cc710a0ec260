//! Daily check-ins and the adherence rate derived from them

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether the experiment's constraint was followed on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adherence {
    /// Constraint followed
    Yes,

    /// Constraint partly followed
    Partial,

    /// Constraint not followed
    No,
}

impl Adherence {
    /// Get the adherence name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Adherence::Yes => "yes",
            Adherence::Partial => "partial",
            Adherence::No => "no",
        }
    }

    /// `Yes` and `Partial` count toward the adherence rate
    pub fn counts_as_adherent(&self) -> bool {
        matches!(self, Adherence::Yes | Adherence::Partial)
    }
}

impl std::str::FromStr for Adherence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(Adherence::Yes),
            "partial" => Ok(Adherence::Partial),
            "no" => Ok(Adherence::No),
            _ => Err(format!("Invalid adherence: {}", s)),
        }
    }
}

/// One day's check-in for a running experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckin {
    /// Unique identifier
    pub id: String,

    /// Experiment this check-in belongs to
    pub experiment_id: String,

    /// Calendar day of the check-in
    pub date: NaiveDate,

    /// Whether the constraint was followed
    pub adherence: Adherence,

    /// Self-reported energy, 1-5
    pub energy: u8,

    /// Optional free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the check-in was recorded
    pub created_at: DateTime<Utc>,
}

impl DailyCheckin {
    /// Lowest accepted energy level
    pub const MIN_ENERGY: u8 = 1;

    /// Highest accepted energy level
    pub const MAX_ENERGY: u8 = 5;

    /// Create a new check-in with a UUIDv7 identifier
    ///
    /// Energy is clamped into `1..=5`.
    pub fn new(
        experiment_id: impl Into<String>,
        date: NaiveDate,
        adherence: Adherence,
        energy: u8,
    ) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            experiment_id: experiment_id.into(),
            date,
            adherence,
            energy: energy.clamp(Self::MIN_ENERGY, Self::MAX_ENERGY),
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Fraction of check-ins that were `Yes` or `Partial`; `0.0` when empty
pub fn adherence_rate(checkins: &[DailyCheckin]) -> f64 {
    if checkins.is_empty() {
        return 0.0;
    }

    let adherent = checkins
        .iter()
        .filter(|c| c.adherence.counts_as_adherent())
        .count();
    adherent as f64 / checkins.len() as f64
}

/// Check-ins that belong to `experiment_id`
pub fn checkins_for<'a>(
    experiment_id: &str,
    checkins: &'a [DailyCheckin],
) -> Vec<&'a DailyCheckin> {
    checkins
        .iter()
        .filter(|c| c.experiment_id == experiment_id)
        .collect()
}

/// Insert `checkin`, replacing any check-in for the same experiment and date
pub fn upsert_checkin(checkins: &mut Vec<DailyCheckin>, checkin: DailyCheckin) {
    checkins.retain(|c| !(c.experiment_id == checkin.experiment_id && c.date == checkin.date));
    checkins.push(checkin);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn adherence_strategy() -> impl Strategy<Value = Adherence> {
        prop_oneof![Just(Adherence::Yes), Just(Adherence::Partial), Just(Adherence::No)]
    }

    proptest! {
        /// Property: adherence rate is a fraction in [0, 1]
        #[test]
        fn test_rate_is_fraction(values in prop::collection::vec(adherence_strategy(), 0..30)) {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let checkins: Vec<_> = values
                .into_iter()
                .map(|a| DailyCheckin::new("exp", date, a, 3))
                .collect();

            let rate = adherence_rate(&checkins);
            prop_assert!((0.0..=1.0).contains(&rate));
        }
    }
}
