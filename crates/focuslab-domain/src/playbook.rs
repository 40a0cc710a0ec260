//! Built-in experiment playbooks

use serde::Serialize;

/// A ready-made experiment: a hypothesis and the constraint that tests it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    /// Stable identifier
    pub id: &'static str,
    /// Short title
    pub title: &'static str,
    /// One-sentence description
    pub description: &'static str,
    /// Hypothesis being tested
    pub hypothesis: &'static str,
    /// Metric the hypothesis is measured on
    pub metric: &'static str,
    /// Constraint applied during the experiment period
    pub default_constraint: &'static str,
    /// Grouping shown in listings
    pub category: &'static str,
}

const FOCUS_BLOCK_METRIC: &str = "Uninterrupted focus blocks per day (25+ minutes each)";

/// The playbook catalog
pub static PLAYBOOKS: [Playbook; 5] = [
    Playbook {
        id: "morning-block",
        title: "Morning Focus Block",
        description: "Start your day with a dedicated 2-hour focus block before checking email or messages.",
        hypothesis: "By starting each day with a dedicated focus block before any communication, I will increase my total daily focus blocks.",
        metric: FOCUS_BLOCK_METRIC,
        default_constraint: "No email or Slack before 10am",
        category: "Schedule",
    },
    Playbook {
        id: "notification-fast",
        title: "Notification Fast",
        description: "Disable all non-essential notifications during work hours to reduce context switching.",
        hypothesis: "By eliminating non-essential notifications during work hours, I will complete more uninterrupted focus blocks.",
        metric: FOCUS_BLOCK_METRIC,
        default_constraint: "Phone on DND, Slack notifications off 9am-5pm",
        category: "Environment",
    },
    Playbook {
        id: "meeting-batching",
        title: "Meeting Batching",
        description: "Consolidate all meetings to specific days or time blocks to protect focus time.",
        hypothesis: "By batching meetings into designated slots, I will have more contiguous time for deep work.",
        metric: FOCUS_BLOCK_METRIC,
        default_constraint: "Meetings only on Tue/Thu or after 2pm daily",
        category: "Schedule",
    },
    Playbook {
        id: "energy-mapping",
        title: "Energy-Aligned Work",
        description: "Schedule your most demanding tasks during your peak energy hours.",
        hypothesis: "By aligning deep work with my natural energy peaks, I will complete more high-quality focus blocks.",
        metric: FOCUS_BLOCK_METRIC,
        default_constraint: "Deep work only during my peak hours (identify yours)",
        category: "Energy",
    },
    Playbook {
        id: "workspace-ritual",
        title: "Focus Workspace Ritual",
        description: "Create a dedicated focus ritual: specific location, startup routine, and end-of-session signal.",
        hypothesis: "By establishing a consistent focus ritual, I will enter deep work states more reliably.",
        metric: FOCUS_BLOCK_METRIC,
        default_constraint: "Same desk setup, same startup routine, timer for blocks",
        category: "Environment",
    },
];

/// Look up a playbook by id
pub fn find_playbook(id: &str) -> Option<&'static Playbook> {
    PLAYBOOKS.iter().find(|p| p.id == id)
}
