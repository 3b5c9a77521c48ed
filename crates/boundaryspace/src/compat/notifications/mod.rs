//! Rule-based notification derivation.
//!
//! Detection is split from presentation: `detect_conditions` evaluates the
//! predicate table and returns bare `TriggerCondition` values, and the
//! template step attaches title/message/priority copy. The split lets the
//! rules be tested without string payloads.

mod rules;
mod templates;

pub use templates::{NotificationCard, NotificationPriority};

use chrono::{DateTime, Utc};

use crate::compat::domain::RelationshipRecord;

/// At most this many cards are surfaced at a time unless the caller asks
/// for a different cap.
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 2;

/// Conditions the rule table can raise, in fixed priority order. The
/// variants carry just enough context for message interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerCondition {
    DealBreakerCrossed {
        relationship: String,
        detail: String,
    },
    WorkplaceEnergyDrain {
        drained_count: usize,
    },
    BounceBack {
        relationship: String,
    },
    BoundaryChampion {
        relationship: String,
    },
    RelationshipGrowth {
        relationship: String,
    },
    CheckInOverdue {
        days_since_last: i64,
    },
}

/// Evaluates every rule over the relationship records. `today` is the
/// caller's reference instant; the rules never read the ambient clock, so
/// identical inputs always produce identical conditions.
pub fn detect_conditions(
    records: &[RelationshipRecord],
    today: DateTime<Utc>,
) -> Vec<TriggerCondition> {
    rules::detect(records, today)
}

/// Full derivation: detect, truncate to `capacity` in priority order, and
/// render each surviving condition into its notification card.
pub fn derive_notifications(
    records: &[RelationshipRecord],
    today: DateTime<Utc>,
    capacity: usize,
) -> Vec<NotificationCard> {
    detect_conditions(records, today)
        .into_iter()
        .take(capacity)
        .map(|condition| templates::render(&condition))
        .collect()
}
