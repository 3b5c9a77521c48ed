use boundaryspace::compat::{
    Baseline, Boundary, NotificationCard, NotificationSink, RelationshipId, RelationshipRecord,
    RelationshipRepository, RepositoryError, ScoringConfig, SinkError,
};
use chrono::{DateTime, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRelationshipRepository {
    baseline: Arc<Mutex<Option<Baseline>>>,
    records: Arc<Mutex<HashMap<RelationshipId, RelationshipRecord>>>,
    boundaries: Arc<Mutex<Vec<Boundary>>>,
}

impl RelationshipRepository for InMemoryRelationshipRepository {
    fn set_baseline(&self, baseline: Baseline) -> Result<Baseline, RepositoryError> {
        let mut guard = self.baseline.lock().expect("baseline mutex poisoned");
        *guard = Some(baseline.clone());
        Ok(baseline)
    }

    fn current_baseline(&self) -> Result<Option<Baseline>, RepositoryError> {
        let guard = self.baseline.lock().expect("baseline mutex poisoned");
        Ok(guard.clone())
    }

    fn insert_relationship(
        &self,
        record: RelationshipRecord,
    ) -> Result<RelationshipRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.relationship.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.relationship.id.clone(), record.clone());
        Ok(record)
    }

    fn update_relationship(&self, record: RelationshipRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
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
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn relationships(&self) -> Result<Vec<RelationshipRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn add_boundary(&self, boundary: Boundary) -> Result<(), RepositoryError> {
        let mut guard = self.boundaries.lock().expect("boundary mutex poisoned");
        guard.push(boundary);
        Ok(())
    }

    fn boundaries(&self) -> Result<Vec<Boundary>, RepositoryError> {
        let guard = self.boundaries.lock().expect("boundary mutex poisoned");
        Ok(guard.clone())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationSink {
    cards: Arc<Mutex<Vec<NotificationCard>>>,
}

impl NotificationSink for InMemoryNotificationSink {
    fn publish(&self, card: NotificationCard) -> Result<(), SinkError> {
        let mut guard = self.cards.lock().expect("sink mutex poisoned");
        guard.push(card);
        Ok(())
    }
}

impl InMemoryNotificationSink {
    pub(crate) fn cards(&self) -> Vec<NotificationCard> {
        self.cards.lock().expect("sink mutex poisoned").clone()
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as RFC 3339 or YYYY-MM-DD ({err})"))
        .and_then(|date| {
            date.and_hms_opt(0, 0, 0)
                .map(|naive| naive.and_utc())
                .ok_or_else(|| format!("'{raw}' has no midnight representation"))
        })
}
