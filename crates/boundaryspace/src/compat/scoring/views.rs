use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    CommunicationStyle,
    BoundaryRespect,
    TriggerManagement,
    EnergyImpact,
    SelfWorthImpact,
}

impl InsightCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CommunicationStyle,
            Self::BoundaryRespect,
            Self::TriggerManagement,
            Self::EnergyImpact,
            Self::SelfWorthImpact,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CommunicationStyle => "Communication Style",
            Self::BoundaryRespect => "Boundary Respect",
            Self::TriggerManagement => "Trigger Management",
            Self::EnergyImpact => "Energy Impact",
            Self::SelfWorthImpact => "Self-Worth Impact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Excellent,
    Good,
    Concerning,
    Poor,
}

impl ScoreStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Concerning => "concerning",
            Self::Poor => "poor",
        }
    }
}

/// One scored category for a relationship, computed fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityInsight {
    pub category: InsightCategory,
    pub category_label: &'static str,
    pub score: f32,
    pub status: ScoreStatus,
    pub status_label: &'static str,
    pub insight: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityBand {
    HighlyCompatible,
    ModeratelyCompatible,
    SomeIssues,
    LowCompatibility,
}

impl CompatibilityBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyCompatible => "Highly Compatible",
            Self::ModeratelyCompatible => "Moderately Compatible",
            Self::SomeIssues => "Some Compatibility Issues",
            Self::LowCompatibility => "Low Compatibility",
        }
    }
}

/// Headline number reduced from the per-category insights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallCompatibility {
    pub score: f32,
    pub band: CompatibilityBand,
    pub band_label: &'static str,
}

/// Four-tier bucket for the flag-ratio score. The tiers key UI color
/// treatments, so they stay independent from the category statuses even
/// though the numeric ranges look similar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagTier {
    Thriving,
    Stable,
    Strained,
    AtRisk,
}

impl FlagTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thriving => "Thriving",
            Self::Stable => "Stable",
            Self::Strained => "Strained",
            Self::AtRisk => "At Risk",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Thriving => "green",
            Self::Stable => "yellow",
            Self::Strained => "orange",
            Self::AtRisk => "red",
        }
    }
}

/// Compatibility estimate derived from aggregate flag counts and the safety
/// rating, used where no interaction history exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlagAssessment {
    pub score: u8,
    pub flag_ratio: u8,
    pub tier: FlagTier,
    pub tier_label: &'static str,
    pub color: &'static str,
}

/// Fraction of the user's standalone boundaries that line up with the
/// baseline's non-negotiable list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryAlignment {
    pub score: u8,
    pub aligned: usize,
    pub total: usize,
    pub non_negotiable_total: usize,
    pub non_negotiable_aligned: usize,
}

/// Full per-relationship compatibility report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityReport {
    pub relationship_name: String,
    pub sample_size: usize,
    pub insights: Vec<CompatibilityInsight>,
    pub overall: OverallCompatibility,
}
