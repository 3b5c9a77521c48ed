use serde::{Deserialize, Serialize};

use super::views::ScoreStatus;

/// Status cutoffs for one scoring category. A score is checked against the
/// bounds from the top down; anything below `concerning` is poor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub excellent: f32,
    pub good: f32,
    pub concerning: f32,
}

impl ThresholdSet {
    pub fn status(&self, score: f32) -> ScoreStatus {
        if score >= self.excellent {
            ScoreStatus::Excellent
        } else if score >= self.good {
            ScoreStatus::Good
        } else if score >= self.concerning {
            ScoreStatus::Concerning
        } else {
            ScoreStatus::Poor
        }
    }
}

/// Default cutoffs shared by the communication and trigger categories.
pub const STANDARD_THRESHOLDS: ThresholdSet = ThresholdSet {
    excellent: 80.0,
    good: 60.0,
    concerning: 40.0,
};

/// Boundary respect is held to a stricter bar than the other categories.
pub const BOUNDARY_THRESHOLDS: ThresholdSet = ThresholdSet {
    excellent: 90.0,
    good: 70.0,
    concerning: 50.0,
};

/// Energy and self-worth scores cluster around the 50 midpoint, so their
/// cutoffs sit lower than the ratio categories.
pub const WELLBEING_THRESHOLDS: ThresholdSet = ThresholdSet {
    excellent: 70.0,
    good: 55.0,
    concerning: 40.0,
};

/// Named scoring constants for every category plus the alignment and
/// flag-ratio heuristics. Collecting them here keeps the threshold sets from
/// drifting apart across call sites; each category still gets its own set
/// because the cutoffs intentionally differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub communication: ThresholdSet,
    pub boundary_respect: ThresholdSet,
    pub trigger_management: ThresholdSet,
    pub energy_impact: ThresholdSet,
    pub self_worth_impact: ThresholdSet,
    pub overall: ThresholdSet,
    pub flag_tier: ThresholdSet,
    /// Importance cutoff (1-10) above which a standalone boundary counts as
    /// non-negotiable for alignment scoring.
    pub non_negotiable_importance: u8,
    /// Weight of the green/red flag ratio in the blended flag score.
    pub flag_ratio_weight: f32,
    /// Weight of the safety rating (scaled to 0-100) in the blended score.
    pub safety_rating_weight: f32,
    /// Flag score reported when a relationship has no flags recorded yet.
    pub neutral_flag_score: u8,
    /// Midpoint of the 1-10 gauges, substituted for missing before/after
    /// readings.
    pub scale_midpoint: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            communication: STANDARD_THRESHOLDS,
            boundary_respect: BOUNDARY_THRESHOLDS,
            trigger_management: STANDARD_THRESHOLDS,
            energy_impact: WELLBEING_THRESHOLDS,
            self_worth_impact: WELLBEING_THRESHOLDS,
            overall: STANDARD_THRESHOLDS,
            flag_tier: STANDARD_THRESHOLDS,
            non_negotiable_importance: 8,
            flag_ratio_weight: 0.7,
            safety_rating_weight: 0.3,
            neutral_flag_score: 50,
            scale_midpoint: 5.0,
        }
    }
}
