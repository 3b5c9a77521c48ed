use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::compat::domain::{
    Baseline, Boundary, CommunicationStyle, ConflictResolution, Interaction, NeedLevel,
    Relationship, RelationshipId, RelationshipKind, RelationshipRecord, RelationshipStats,
    RelationshipStatus,
};
use crate::compat::notifications::NotificationCard;
use crate::compat::repository::{
    NotificationSink, RelationshipRepository, RepositoryError, SinkError,
};
use crate::compat::scoring::{CompatibilityEngine, ScoringConfig};
use crate::compat::service::CompatibilityService;

pub(super) fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn baseline() -> Baseline {
    Baseline {
        communication_style: CommunicationStyle::Direct,
        conflict_resolution: ConflictResolution::DiscussImmediately,
        personal_space_needs: NeedLevel::High,
        emotional_support_level: NeedLevel::Medium,
        non_negotiable_boundaries: vec![
            "poor communication".to_string(),
            "dishonesty".to_string(),
        ],
        flexible_boundaries: vec!["spontaneous plans".to_string()],
        triggers: vec!["being interrupted".to_string()],
        version: 1,
        recorded_at: ts(1, 9),
    }
}

/// Fully positive entry: everything respected, energy 5 to 8, self-worth
/// 5 to 7. Matches the worked single-interaction scoring scenario.
pub(super) fn strong_interaction(day: u32) -> Interaction {
    Interaction {
        logged_at: ts(day, 18),
        communication_style_respected: true,
        boundaries_respected: true,
        boundaries_violated: Vec::new(),
        triggers_avoided: true,
        boundary_tested: false,
        energy_before: Some(5),
        energy_after: Some(8),
        self_worth_before: Some(5),
        self_worth_after: Some(7),
        deal_breakers_crossed: Vec::new(),
    }
}

/// Negative entry: nothing respected, energy and self-worth both drop.
pub(super) fn draining_interaction(day: u32) -> Interaction {
    Interaction {
        logged_at: ts(day, 18),
        communication_style_respected: false,
        boundaries_respected: false,
        boundaries_violated: vec!["personal space".to_string()],
        triggers_avoided: false,
        boundary_tested: false,
        energy_before: Some(7),
        energy_after: Some(3),
        self_worth_before: Some(6),
        self_worth_after: Some(4),
        deal_breakers_crossed: Vec::new(),
    }
}

/// Entry with no gauges filled in; the scorer should read it as neutral.
pub(super) fn sparse_interaction(day: u32) -> Interaction {
    Interaction {
        logged_at: ts(day, 12),
        communication_style_respected: true,
        boundaries_respected: true,
        boundaries_violated: Vec::new(),
        triggers_avoided: true,
        boundary_tested: false,
        energy_before: None,
        energy_after: None,
        self_worth_before: None,
        self_worth_after: None,
        deal_breakers_crossed: Vec::new(),
    }
}

pub(super) fn record(
    id: &str,
    name: &str,
    kind: RelationshipKind,
    interactions: Vec<Interaction>,
) -> RelationshipRecord {
    RelationshipRecord {
        relationship: Relationship {
            id: RelationshipId(id.to_string()),
            name: name.to_string(),
            kind,
            status: RelationshipStatus::Active,
        },
        stats: RelationshipStats::default(),
        interactions,
    }
}

pub(super) fn boundary(title: &str, category: &str, importance: u8) -> Boundary {
    Boundary {
        title: title.to_string(),
        category: category.to_string(),
        importance,
    }
}

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(ScoringConfig::default())
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    baseline: Mutex<Option<Baseline>>,
    records: Mutex<HashMap<RelationshipId, RelationshipRecord>>,
    boundaries: Mutex<Vec<Boundary>>,
}

impl RelationshipRepository for MemoryRepository {
    fn set_baseline(&self, baseline: Baseline) -> Result<Baseline, RepositoryError> {
        let mut guard = self.baseline.lock().expect("baseline mutex poisoned");
        *guard = Some(baseline.clone());
        Ok(baseline)
    }

    fn current_baseline(&self) -> Result<Option<Baseline>, RepositoryError> {
        Ok(self.baseline.lock().expect("baseline mutex poisoned").clone())
    }

    fn insert_relationship(
        &self,
        record: RelationshipRecord,
    ) -> Result<RelationshipRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("records mutex poisoned");
        if guard.contains_key(&record.relationship.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.relationship.id.clone(), record.clone());
        Ok(record)
    }

    fn update_relationship(&self, record: RelationshipRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("records mutex poisoned");
        if guard.contains_key(&record.relationship.id) {
            guard.insert(record.relationship.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch_relationship(
        &self,
        id: &RelationshipId,
    ) -> Result<Option<RelationshipRecord>, RepositoryError> {
        let guard = self.records.lock().expect("records mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn relationships(&self) -> Result<Vec<RelationshipRecord>, RepositoryError> {
        let guard = self.records.lock().expect("records mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn add_boundary(&self, boundary: Boundary) -> Result<(), RepositoryError> {
        self.boundaries
            .lock()
            .expect("boundaries mutex poisoned")
            .push(boundary);
        Ok(())
    }

    fn boundaries(&self) -> Result<Vec<Boundary>, RepositoryError> {
        Ok(self
            .boundaries
            .lock()
            .expect("boundaries mutex poisoned")
            .clone())
    }
}

#[derive(Default)]
pub(super) struct MemorySink {
    cards: Mutex<Vec<NotificationCard>>,
}

impl MemorySink {
    pub(super) fn cards(&self) -> Vec<NotificationCard> {
        self.cards.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for MemorySink {
    fn publish(&self, card: NotificationCard) -> Result<(), SinkError> {
        self.cards.lock().expect("sink mutex poisoned").push(card);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    CompatibilityService<MemoryRepository, MemorySink>,
    Arc<MemoryRepository>,
    Arc<MemorySink>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let sink = Arc::new(MemorySink::default());
    let service =
        CompatibilityService::new(repository.clone(), sink.clone(), ScoringConfig::default());
    (service, repository, sink)
}
