use chrono::{DateTime, Utc};

use super::TriggerCondition;
use crate::compat::domain::{Interaction, RelationshipKind, RelationshipRecord};

const WORKPLACE_DRAIN_POINTS: i16 = -2;
const WORKPLACE_DRAIN_MIN_COUNT: usize = 2;
const GROWTH_WINDOW: usize = 3;
const CHECK_IN_OVERDUE_DAYS: i64 = 7;

/// Runs every predicate and collects raised conditions in priority order.
/// Each rule fires at most once per evaluation.
pub(super) fn detect(
    records: &[RelationshipRecord],
    today: DateTime<Utc>,
) -> Vec<TriggerCondition> {
    let mut conditions = Vec::new();

    if let Some(condition) = deal_breaker_crossed(records) {
        conditions.push(condition);
    }
    if let Some(condition) = workplace_energy_drain(records) {
        conditions.push(condition);
    }
    if let Some(condition) = bounce_back(records) {
        conditions.push(condition);
    }
    if let Some(condition) = boundary_champion(records) {
        conditions.push(condition);
    }
    if let Some(condition) = relationship_growth(records) {
        conditions.push(condition);
    }
    if let Some(condition) = check_in_overdue(records, today) {
        conditions.push(condition);
    }

    conditions
}

/// Interactions sorted oldest-first. The log is append-only but callers may
/// hand us records hydrated in any order.
fn chronological(record: &RelationshipRecord) -> Vec<&Interaction> {
    let mut entries: Vec<&Interaction> = record.interactions.iter().collect();
    entries.sort_by_key(|entry| entry.logged_at);
    entries
}

/// A crossed deal-breaker anywhere in the log outranks every other rule.
/// The most recently logged crossing wins the message slot.
fn deal_breaker_crossed(records: &[RelationshipRecord]) -> Option<TriggerCondition> {
    records
        .iter()
        .flat_map(|record| {
            record
                .interactions
                .iter()
                .filter(|entry| !entry.deal_breakers_crossed.is_empty())
                .map(move |entry| (record, entry))
        })
        .max_by_key(|(_, entry)| entry.logged_at)
        .map(|(record, entry)| TriggerCondition::DealBreakerCrossed {
            relationship: record.relationship.name.clone(),
            detail: entry.deal_breakers_crossed.join(", "),
        })
}

/// Two or more workplace interactions each losing two or more energy points.
fn workplace_energy_drain(records: &[RelationshipRecord]) -> Option<TriggerCondition> {
    let drained_count = records
        .iter()
        .filter(|record| record.relationship.kind == RelationshipKind::Workplace)
        .flat_map(|record| record.interactions.iter())
        .filter(|entry| entry.energy_change() <= WORKPLACE_DRAIN_POINTS)
        .count();

    (drained_count >= WORKPLACE_DRAIN_MIN_COUNT)
        .then_some(TriggerCondition::WorkplaceEnergyDrain { drained_count })
}

/// A negative-energy interaction immediately followed, within the same
/// relationship, by a positive one.
fn bounce_back(records: &[RelationshipRecord]) -> Option<TriggerCondition> {
    records.iter().find_map(|record| {
        let entries = chronological(record);
        entries
            .windows(2)
            .any(|pair| pair[0].energy_change() < 0 && pair[1].energy_change() > 0)
            .then(|| TriggerCondition::BounceBack {
                relationship: record.relationship.name.clone(),
            })
    })
}

/// A boundary was tested and held: tested flag set, boundaries respected,
/// nothing in the violated list.
fn boundary_champion(records: &[RelationshipRecord]) -> Option<TriggerCondition> {
    records.iter().find_map(|record| {
        record
            .interactions
            .iter()
            .any(|entry| {
                entry.boundary_tested
                    && entry.boundaries_respected
                    && entry.boundaries_violated.is_empty()
            })
            .then(|| TriggerCondition::BoundaryChampion {
                relationship: record.relationship.name.clone(),
            })
    })
}

/// The three most recent interactions in a relationship all respected
/// boundaries with a non-negative combined energy change.
fn relationship_growth(records: &[RelationshipRecord]) -> Option<TriggerCondition> {
    records.iter().find_map(|record| {
        let entries = chronological(record);
        if entries.len() < GROWTH_WINDOW {
            return None;
        }
        let window = &entries[entries.len() - GROWTH_WINDOW..];
        let respected = window.iter().all(|entry| entry.boundaries_respected);
        let energy_total: i16 = window.iter().map(|entry| entry.energy_change()).sum();

        (respected && energy_total >= 0).then(|| TriggerCondition::RelationshipGrowth {
            relationship: record.relationship.name.clone(),
        })
    })
}

/// Seven or more days since the newest entry anywhere in the log, measured
/// against the passed-in reference instant. No entries means nothing to
/// come back to, so the rule stays quiet.
fn check_in_overdue(
    records: &[RelationshipRecord],
    today: DateTime<Utc>,
) -> Option<TriggerCondition> {
    let last_logged = records
        .iter()
        .flat_map(|record| record.interactions.iter())
        .map(|entry| entry.logged_at)
        .max()?;

    let days_since_last = (today - last_logged).num_days();
    (days_since_last >= CHECK_IN_OVERDUE_DAYS)
        .then_some(TriggerCondition::CheckInOverdue { days_since_last })
}
