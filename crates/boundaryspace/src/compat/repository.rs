use super::domain::{Baseline, Boundary, RelationshipId, RelationshipRecord};
use super::notifications::NotificationCard;

/// Storage abstraction over the user's baseline, relationships, and
/// standalone boundaries, so the service module can be exercised in
/// isolation. The engine itself never touches storage.
pub trait RelationshipRepository: Send + Sync {
    /// Stores a new baseline version, superseding the current one.
    fn set_baseline(&self, baseline: Baseline) -> Result<Baseline, RepositoryError>;
    /// The latest baseline version, if the assessment was ever completed.
    fn current_baseline(&self) -> Result<Option<Baseline>, RepositoryError>;
    fn insert_relationship(
        &self,
        record: RelationshipRecord,
    ) -> Result<RelationshipRecord, RepositoryError>;
    fn update_relationship(&self, record: RelationshipRecord) -> Result<(), RepositoryError>;
    fn fetch_relationship(
        &self,
        id: &RelationshipId,
    ) -> Result<Option<RelationshipRecord>, RepositoryError>;
    fn relationships(&self) -> Result<Vec<RelationshipRecord>, RepositoryError>;
    fn add_boundary(&self, boundary: Boundary) -> Result<(), RepositoryError>;
    fn boundaries(&self) -> Result<Vec<Boundary>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for the notification/achievement layer that consumes the
/// trigger conditions the engine derives.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, card: NotificationCard) -> Result<(), SinkError>;
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
