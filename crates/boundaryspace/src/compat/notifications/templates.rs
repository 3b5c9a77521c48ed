use serde::{Deserialize, Serialize};

use super::TriggerCondition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    High,
    Medium,
    Low,
}

impl NotificationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Renderable card handed to the notification layer. The title/action copy
/// is fixed per condition; only the message interpolates context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationCard {
    pub title: &'static str,
    pub message: String,
    pub priority: NotificationPriority,
    pub action: &'static str,
}

pub(super) fn render(condition: &TriggerCondition) -> NotificationCard {
    match condition {
        TriggerCondition::DealBreakerCrossed {
            relationship,
            detail,
        } => NotificationCard {
            title: "Deal-Breaker Alert",
            message: format!(
                "A non-negotiable was crossed with {relationship}: {detail}. This is exactly what your baseline flagged."
            ),
            priority: NotificationPriority::High,
            action: "Review this relationship",
        },
        TriggerCondition::WorkplaceEnergyDrain { drained_count } => NotificationCard {
            title: "Workplace Energy Alert",
            message: format!(
                "{drained_count} recent workplace interactions each cost you 2+ energy points. Work relationships are draining you."
            ),
            priority: NotificationPriority::High,
            action: "Plan recovery time",
        },
        TriggerCondition::BounceBack { relationship } => NotificationCard {
            title: "Bounce Back Stronger",
            message: format!(
                "A tough interaction with {relationship} was followed by a better one. That recovery is worth noticing."
            ),
            priority: NotificationPriority::Medium,
            action: "See what changed",
        },
        TriggerCondition::BoundaryChampion { relationship } => NotificationCard {
            title: "Boundary Champion",
            message: format!(
                "A boundary was tested with {relationship} and it held. You stood your ground."
            ),
            priority: NotificationPriority::Medium,
            action: "Celebrate the win",
        },
        TriggerCondition::RelationshipGrowth { relationship } => NotificationCard {
            title: "Relationship Growth",
            message: format!(
                "Your last few interactions with {relationship} respected your boundaries without draining you. This one is trending up."
            ),
            priority: NotificationPriority::Low,
            action: "Keep the streak going",
        },
        TriggerCondition::CheckInOverdue { days_since_last } => NotificationCard {
            title: "Time to Check In",
            message: format!(
                "It has been {days_since_last} days since your last logged interaction. A quick entry keeps your scores honest."
            ),
            priority: NotificationPriority::Low,
            action: "Log an interaction",
        },
    }
}
