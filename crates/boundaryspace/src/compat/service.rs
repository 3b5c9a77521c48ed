use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{
    Baseline, Boundary, CommunicationStyle, ConflictResolution, FlagPolarity, Interaction,
    NeedLevel, Relationship, RelationshipId, RelationshipKind, RelationshipRecord,
    RelationshipStats, RelationshipStatus,
};
use super::notifications::{self, NotificationCard};
use super::repository::{NotificationSink, RelationshipRepository, RepositoryError, SinkError};
use super::scoring::{
    BoundaryAlignment, CompatibilityEngine, CompatibilityInsight, FlagAssessment,
    OverallCompatibility, ScoringConfig,
};

/// Service composing the repository, notification sink, and scoring engine.
/// All scoring stays pure; this layer only moves records in and out.
pub struct CompatibilityService<R, S> {
    repository: Arc<R>,
    sink: Arc<S>,
    engine: Arc<CompatibilityEngine>,
    notification_capacity: usize,
}

static RELATIONSHIP_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_relationship_id() -> RelationshipId {
    let id = RELATIONSHIP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RelationshipId(format!("rel-{id:06}"))
}

/// Baseline assessment answers as submitted; the service assigns the
/// version number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineDraft {
    pub communication_style: CommunicationStyle,
    pub conflict_resolution: ConflictResolution,
    pub personal_space_needs: NeedLevel,
    pub emotional_support_level: NeedLevel,
    #[serde(default)]
    pub non_negotiable_boundaries: Vec<String>,
    #[serde(default)]
    pub flexible_boundaries: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Whether a relationship report could be fully computed, or which input is
/// still missing. Missing data is a state the caller renders, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportAvailability {
    Ready,
    AwaitingBaseline,
    AwaitingInteractions,
}

impl ReportAvailability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::AwaitingBaseline => "Complete your baseline assessment",
            Self::AwaitingInteractions => "Log an interaction to see compatibility",
        }
    }
}

/// Per-relationship report as served over the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipReportView {
    pub relationship: Relationship,
    pub availability: ReportAvailability,
    pub availability_label: &'static str,
    pub sample_size: usize,
    pub insights: Vec<CompatibilityInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallCompatibility>,
    pub flag_assessment: FlagAssessment,
}

/// Dashboard row: one relationship with its flag-ratio assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipOverview {
    pub relationship: Relationship,
    pub stats: RelationshipStats,
    pub assessment: FlagAssessment,
    pub interaction_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_logged_at: Option<DateTime<Utc>>,
}

impl<R, S> CompatibilityService<R, S>
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    pub fn new(repository: Arc<R>, sink: Arc<S>, config: ScoringConfig) -> Self {
        Self {
            repository,
            sink,
            engine: Arc::new(CompatibilityEngine::new(config)),
            notification_capacity: notifications::DEFAULT_NOTIFICATION_CAPACITY,
        }
    }

    pub fn with_notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity;
        self
    }

    pub fn engine(&self) -> &CompatibilityEngine {
        &self.engine
    }

    /// Records a new baseline version. Existing versions are superseded,
    /// never mutated, so exactly one baseline is current afterwards.
    pub fn set_baseline(&self, draft: BaselineDraft) -> Result<Baseline, ServiceError> {
        let version = self
            .repository
            .current_baseline()?
            .map(|current| current.version + 1)
            .unwrap_or(1);

        let baseline = Baseline {
            communication_style: draft.communication_style,
            conflict_resolution: draft.conflict_resolution,
            personal_space_needs: draft.personal_space_needs,
            emotional_support_level: draft.emotional_support_level,
            non_negotiable_boundaries: draft.non_negotiable_boundaries,
            flexible_boundaries: draft.flexible_boundaries,
            triggers: draft.triggers,
            version,
            recorded_at: draft.recorded_at,
        };

        let stored = self.repository.set_baseline(baseline)?;
        info!(version = stored.version, "baseline assessment recorded");
        Ok(stored)
    }

    pub fn current_baseline(&self) -> Result<Option<Baseline>, ServiceError> {
        Ok(self.repository.current_baseline()?)
    }

    pub fn add_relationship(
        &self,
        name: String,
        kind: RelationshipKind,
    ) -> Result<RelationshipRecord, ServiceError> {
        let record = RelationshipRecord {
            relationship: Relationship {
                id: next_relationship_id(),
                name,
                kind,
                status: RelationshipStatus::Active,
            },
            stats: RelationshipStats::default(),
            interactions: Vec::new(),
        };
        let stored = self.repository.insert_relationship(record)?;
        debug!(id = %stored.relationship.id.0, "relationship created");
        Ok(stored)
    }

    /// Appends an interaction to the relationship's log, then re-derives
    /// notifications across the whole ledger and publishes the surviving
    /// cards to the sink. The entry's own timestamp is the reference
    /// instant, so replaying the same log yields the same cards.
    pub fn log_interaction(
        &self,
        id: &RelationshipId,
        interaction: Interaction,
    ) -> Result<Vec<NotificationCard>, ServiceError> {
        let mut record = self
            .repository
            .fetch_relationship(id)?
            .ok_or(RepositoryError::NotFound)?;

        let logged_at = interaction.logged_at;
        record.interactions.push(interaction);
        self.repository.update_relationship(record)?;

        let records = self.repository.relationships()?;
        let cards =
            notifications::derive_notifications(&records, logged_at, self.notification_capacity);
        for card in &cards {
            self.sink.publish(card.clone())?;
        }

        debug!(id = %id.0, cards = cards.len(), "interaction logged");
        Ok(cards)
    }

    /// Tallies a green or red flag observation on the relationship.
    pub fn record_flag(
        &self,
        id: &RelationshipId,
        polarity: FlagPolarity,
    ) -> Result<RelationshipStats, ServiceError> {
        let mut record = self
            .repository
            .fetch_relationship(id)?
            .ok_or(RepositoryError::NotFound)?;

        match polarity {
            FlagPolarity::Green => record.stats.green_flags += 1,
            FlagPolarity::Red => record.stats.red_flags += 1,
        }

        let stats = record.stats.clone();
        self.repository.update_relationship(record)?;
        Ok(stats)
    }

    /// Folds a 1-10 safety rating into the running average. Out-of-range
    /// ratings are clamped rather than rejected.
    pub fn record_check_in(
        &self,
        id: &RelationshipId,
        safety_rating: u8,
    ) -> Result<RelationshipStats, ServiceError> {
        let mut record = self
            .repository
            .fetch_relationship(id)?
            .ok_or(RepositoryError::NotFound)?;

        let rating = f32::from(safety_rating).clamp(1.0, 10.0);
        let count = record.stats.check_in_count;
        let previous = record.stats.average_safety_rating.unwrap_or(0.0);
        let average = (previous * count as f32 + rating) / (count + 1) as f32;

        record.stats.average_safety_rating = Some(average);
        record.stats.check_in_count = count + 1;

        let stats = record.stats.clone();
        self.repository.update_relationship(record)?;
        Ok(stats)
    }

    pub fn add_boundary(&self, boundary: Boundary) -> Result<(), ServiceError> {
        self.repository.add_boundary(boundary)?;
        Ok(())
    }

    /// Full compatibility report for one relationship. A missing baseline
    /// or empty log shows up as an availability state, never as an error.
    pub fn report(&self, id: &RelationshipId) -> Result<RelationshipReportView, ServiceError> {
        let record = self
            .repository
            .fetch_relationship(id)?
            .ok_or(RepositoryError::NotFound)?;
        let baseline = self.repository.current_baseline()?;
        let flag_assessment = self.engine.score_flag_ratio(&record.stats);

        let (availability, insights, overall) = match baseline {
            None => (ReportAvailability::AwaitingBaseline, Vec::new(), None),
            Some(baseline) => {
                let insights = self.engine.score_categories(
                    &record.interactions,
                    &baseline,
                    &record.relationship.name,
                );
                let overall = self.engine.aggregate_overall(&insights);
                let availability = if record.interactions.is_empty() {
                    ReportAvailability::AwaitingInteractions
                } else {
                    ReportAvailability::Ready
                };
                (availability, insights, Some(overall))
            }
        };

        Ok(RelationshipReportView {
            availability,
            availability_label: availability.label(),
            sample_size: record.interactions.len(),
            insights,
            overall,
            flag_assessment,
            relationship: record.relationship,
        })
    }

    /// Alignment between standalone boundaries and the current baseline.
    /// `None` means not enough data yet.
    pub fn boundary_alignment(&self) -> Result<Option<BoundaryAlignment>, ServiceError> {
        let boundaries = self.repository.boundaries()?;
        let baseline = self.repository.current_baseline()?;
        Ok(self
            .engine
            .score_boundary_alignment(&boundaries, baseline.as_ref()))
    }

    /// One flag-ratio assessment per relationship for the dashboard.
    pub fn overview(&self) -> Result<Vec<RelationshipOverview>, ServiceError> {
        let mut rows: Vec<RelationshipOverview> = self
            .repository
            .relationships()?
            .into_iter()
            .map(|record| RelationshipOverview {
                assessment: self.engine.score_flag_ratio(&record.stats),
                interaction_count: record.interactions.len(),
                last_logged_at: record
                    .interactions
                    .iter()
                    .map(|entry| entry.logged_at)
                    .max(),
                stats: record.stats,
                relationship: record.relationship,
            })
            .collect();
        rows.sort_by(|a, b| a.relationship.id.cmp(&b.relationship.id));
        Ok(rows)
    }

    /// Freshly derived notification cards against the given reference
    /// instant, without publishing them.
    pub fn notifications(
        &self,
        today: DateTime<Utc>,
    ) -> Result<Vec<NotificationCard>, ServiceError> {
        let records = self.repository.relationships()?;
        Ok(notifications::derive_notifications(
            &records,
            today,
            self.notification_capacity,
        ))
    }
}

/// Error raised by the compatibility service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
