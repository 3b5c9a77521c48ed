//! Compatibility scoring engine.
//!
//! Every function here is pure and total over its documented inputs: the
//! engine consumes already-fetched, immutable records and recomputes from
//! scratch on each call. Degraded input (missing baseline, empty histories)
//! resolves to defined "not enough data" values, never to errors.

mod alignment;
mod categories;
pub mod config;
mod flags;
mod overall;
pub mod views;

pub use config::{ScoringConfig, ThresholdSet};
pub use views::{
    BoundaryAlignment, CompatibilityBand, CompatibilityInsight, CompatibilityReport,
    FlagAssessment, FlagTier, InsightCategory, OverallCompatibility, ScoreStatus,
};

use crate::compat::domain::{Baseline, Boundary, Interaction, RelationshipStats};

/// Stateless scorer applying one `ScoringConfig` to relationship data.
pub struct CompatibilityEngine {
    config: ScoringConfig,
}

impl CompatibilityEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// One insight per category in fixed order, or an empty list when no
    /// interactions have been logged yet.
    pub fn score_categories(
        &self,
        interactions: &[Interaction],
        baseline: &Baseline,
        relationship_name: &str,
    ) -> Vec<CompatibilityInsight> {
        categories::score_categories(interactions, baseline, relationship_name, &self.config)
    }

    /// Headline score reduced from the category insights.
    pub fn aggregate_overall(&self, insights: &[CompatibilityInsight]) -> OverallCompatibility {
        overall::aggregate_overall(insights, &self.config)
    }

    /// Alignment between standalone boundaries and the baseline's
    /// non-negotiable list. `None` means not enough data to say.
    pub fn score_boundary_alignment(
        &self,
        boundaries: &[Boundary],
        baseline: Option<&Baseline>,
    ) -> Option<BoundaryAlignment> {
        alignment::score_boundary_alignment(boundaries, baseline, &self.config)
    }

    /// Flag-count based estimate for relationships without interaction data.
    pub fn score_flag_ratio(&self, stats: &RelationshipStats) -> FlagAssessment {
        flags::score_flag_ratio(stats, &self.config)
    }

    /// Full per-relationship report: categories plus the overall aggregate.
    pub fn report(
        &self,
        relationship_name: &str,
        interactions: &[Interaction],
        baseline: &Baseline,
    ) -> CompatibilityReport {
        let insights = self.score_categories(interactions, baseline, relationship_name);
        let overall = self.aggregate_overall(&insights);
        CompatibilityReport {
            relationship_name: relationship_name.to_string(),
            sample_size: interactions.len(),
            insights,
            overall,
        }
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
