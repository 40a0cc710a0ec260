//! Human-readable explanations of an analysis

use crate::analysis::ExperimentAnalysis;
use crate::decision::Decision;
use crate::weekday::DayOfWeekPattern;
use std::cmp::Ordering;

/// Adherence percentage below which a retest is blamed on adherence
const LOW_ADHERENCE_PERCENT: u32 = 70;

/// Explain why `analysis` reached its decision
///
/// Numbers are quoted as stored in the analysis (already rounded).
pub fn decision_explanation(analysis: &ExperimentAnalysis) -> String {
    let ExperimentAnalysis {
        lift,
        ci_lower,
        ci_upper,
        adherence_rate,
        decision,
        ..
    } = analysis;

    match decision {
        Decision::Keep => format!(
            "This experiment shows a meaningful improvement of +{} focus blocks/day. \
             Your adherence was strong at {}%, and the confidence interval suggests \
             this effect is likely real (95% CI: {} to {}).",
            lift, adherence_rate, ci_lower, ci_upper
        ),
        Decision::Drop if *lift <= 0.0 => format!(
            "This experiment didn't improve your focus blocks (change: {}). The data \
             suggests this habit change isn't working for you in its current form.",
            lift
        ),
        Decision::Drop => format!(
            "While there was a small improvement, the effect is too small to be \
             confident it's real (95% CI upper bound: {}). Consider trying a \
             different approach.",
            ci_upper
        ),
        Decision::Retest if *adherence_rate < LOW_ADHERENCE_PERCENT => format!(
            "The results are inconclusive. Your adherence was {}%, which makes it hard \
             to evaluate the true effect. Consider running this experiment again with \
             stricter adherence.",
            adherence_rate
        ),
        Decision::Retest => format!(
            "The results are promising but not conclusive (95% CI: {} to {}). Consider \
             running for another week to gather more data.",
            ci_lower, ci_upper
        ),
    }
}

/// Name the best and worst focus weekdays
///
/// Only weekdays with a positive average are considered. Empty when none
/// are; a "consistent" message when best and worst averages are equal.
pub fn day_of_week_insight(pattern: &DayOfWeekPattern) -> String {
    let mut days: Vec<(&str, f64)> = pattern.iter().filter(|(_, avg)| *avg > 0.0).collect();

    // Stable sort keeps Sunday-first order among equal averages
    days.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let (Some(best), Some(worst)) = (days.first(), days.last()) else {
        return String::new();
    };

    if best.1 == worst.1 {
        return "Your focus is consistent across days of the week.".to_string();
    }

    format!(
        "Your best focus day is {} (avg {:.1} blocks). {} tends to have fewer focus blocks (avg {:.1}).",
        best.0, best.1, worst.0, worst.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(
        decision: Decision,
        lift: f64,
        ci: (f64, f64),
        adherence: u32,
    ) -> ExperimentAnalysis {
        ExperimentAnalysis {
            baseline_mean: 2.0,
            experiment_mean: 2.0 + lift,
            lift,
            ci_lower: ci.0,
            ci_upper: ci.1,
            adherence_rate: adherence,
            decision,
            day_of_week_pattern: DayOfWeekPattern::default(),
        }
    }

    #[test]
    fn test_keep_mentions_numbers() {
        let text = decision_explanation(&analysis(Decision::Keep, 1.5, (0.4, 2.1), 86));
        assert!(text.contains("+1.5"));
        assert!(text.contains("86%"));
        assert!(text.contains("0.4 to 2.1"));
    }

    #[test]
    fn test_drop_no_improvement() {
        let text = decision_explanation(&analysis(Decision::Drop, -0.4, (-1.0, 0.2), 90));
        assert!(text.contains("didn't improve"));
        assert!(text.contains("-0.4"));
    }

    #[test]
    fn test_drop_effect_too_small() {
        let text = decision_explanation(&analysis(Decision::Drop, 0.1, (0.0, 0.1), 90));
        assert!(text.contains("too small"));
        assert!(text.contains("upper bound: 0.1"));
    }

    #[test]
    fn test_retest_low_adherence() {
        let text = decision_explanation(&analysis(Decision::Retest, 0.5, (-0.2, 1.1), 50));
        assert!(text.contains("inconclusive"));
        assert!(text.contains("50%"));
    }

    #[test]
    fn test_retest_needs_more_data() {
        let text = decision_explanation(&analysis(Decision::Retest, 0.5, (-0.2, 1.1), 70));
        assert!(text.contains("promising"));
        assert!(text.contains("-0.2 to 1.1"));
    }

    #[test]
    fn test_insight_empty_pattern() {
        assert_eq!(day_of_week_insight(&DayOfWeekPattern::default()), "");
    }

    #[test]
    fn test_insight_tie_is_consistent() {
        let mut pattern = DayOfWeekPattern::default();
        pattern.set("Monday", 5.0);
        pattern.set("Tuesday", 5.0);
        assert_eq!(
            day_of_week_insight(&pattern),
            "Your focus is consistent across days of the week."
        );
    }

    #[test]
    fn test_insight_single_day_is_consistent() {
        let mut pattern = DayOfWeekPattern::default();
        pattern.set("Friday", 2.0);
        assert!(day_of_week_insight(&pattern).contains("consistent"));
    }

    #[test]
    fn test_insight_best_and_worst() {
        let pattern = DayOfWeekPattern::from_averages([0.0, 2.0, 4.4, 3.0, 3.0, 1.5, 0.0]);
        assert_eq!(
            day_of_week_insight(&pattern),
            "Your best focus day is Tuesday (avg 4.4 blocks). Friday tends to have fewer focus blocks (avg 1.5)."
        );
    }
}
