//! Relationship compatibility tracking: domain records, the scoring
//! engine, notification derivation, and the stateless service/router that
//! expose them.

pub mod domain;
pub mod notifications;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Baseline, Boundary, CommunicationStyle, ConflictResolution, FlagPolarity, Interaction,
    NeedLevel, Relationship, RelationshipId, RelationshipKind, RelationshipRecord,
    RelationshipStats, RelationshipStatus,
};
pub use notifications::{
    derive_notifications, detect_conditions, NotificationCard, NotificationPriority,
    TriggerCondition, DEFAULT_NOTIFICATION_CAPACITY,
};
pub use repository::{
    NotificationSink, RelationshipRepository, RepositoryError, SinkError,
};
pub use router::compatibility_router;
pub use scoring::{
    BoundaryAlignment, CompatibilityBand, CompatibilityEngine, CompatibilityInsight,
    CompatibilityReport, FlagAssessment, FlagTier, InsightCategory, OverallCompatibility,
    ScoreStatus, ScoringConfig, ThresholdSet,
};
pub use service::{
    BaselineDraft, CompatibilityService, RelationshipOverview, RelationshipReportView,
    ReportAvailability, ServiceError,
};
