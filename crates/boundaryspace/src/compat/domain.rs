use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    Direct,
    Gentle,
    Collaborative,
    Assertive,
}

impl CommunicationStyle {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Gentle => "gentle",
            Self::Collaborative => "collaborative",
            Self::Assertive => "assertive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictResolution {
    DiscussImmediately,
    CoolOffFirst,
    WriteItOut,
    ThirdPartyHelp,
}

impl ConflictResolution {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DiscussImmediately => "discuss immediately",
            Self::CoolOffFirst => "cool off first",
            Self::WriteItOut => "write it out",
            Self::ThirdPartyHelp => "bring in a third party",
        }
    }
}

/// Three-level scale shared by personal-space and emotional-support needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedLevel {
    High,
    Medium,
    Low,
}

impl NeedLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A user's self-reported preference profile from the baseline assessment.
///
/// Baselines are versioned and append-only: completing the assessment again
/// supersedes the current version rather than mutating it, so at most one
/// baseline is ever current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub communication_style: CommunicationStyle,
    pub conflict_resolution: ConflictResolution,
    pub personal_space_needs: NeedLevel,
    pub emotional_support_level: NeedLevel,
    pub non_negotiable_boundaries: Vec<String>,
    pub flexible_boundaries: Vec<String>,
    pub triggers: Vec<String>,
    #[serde(default)]
    pub version: u32,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelationshipId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Romantic,
    Friendship,
    Family,
    Workplace,
    Other,
}

impl RelationshipKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Romantic => "Romantic",
            Self::Friendship => "Friendship",
            Self::Family => "Family",
            Self::Workplace => "Workplace",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStatus {
    Active,
    Paused,
    Ended,
}

impl RelationshipStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Ended => "Ended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub name: String,
    pub kind: RelationshipKind,
    pub status: RelationshipStatus,
}

/// Aggregate counters maintained alongside a relationship as flags and
/// check-ins accrue. Used by the flag-ratio scorer when no interaction
/// history is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipStats {
    pub green_flags: u32,
    pub red_flags: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_safety_rating: Option<f32>,
    pub check_in_count: u32,
}

/// A single logged encounter within a relationship. Interactions are
/// append-only: once logged they are never edited, so scoring over them is
/// reproducible.
///
/// The 1-10 before/after gauges are optional; a missing gauge is treated as
/// the scale midpoint (5) by the scorer so partially filled entries do not
/// drag scores toward zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub logged_at: DateTime<Utc>,
    pub communication_style_respected: bool,
    pub boundaries_respected: bool,
    #[serde(default)]
    pub boundaries_violated: Vec<String>,
    pub triggers_avoided: bool,
    #[serde(default)]
    pub boundary_tested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_before: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_after: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_worth_before: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_worth_after: Option<u8>,
    #[serde(default)]
    pub deal_breakers_crossed: Vec<String>,
}

/// Midpoint of the 1-10 gauges; substituted for missing readings so a
/// partially filled entry reads as neutral.
pub const SCALE_MIDPOINT: u8 = 5;

impl Interaction {
    pub fn energy_change(&self) -> i16 {
        gauge_change(self.energy_before, self.energy_after)
    }

    pub fn self_worth_change(&self) -> i16 {
        gauge_change(self.self_worth_before, self.self_worth_after)
    }
}

fn gauge_change(before: Option<u8>, after: Option<u8>) -> i16 {
    let before = before.unwrap_or(SCALE_MIDPOINT);
    let after = after.unwrap_or(SCALE_MIDPOINT);
    i16::from(after) - i16::from(before)
}

/// A relationship together with its derived stats and append-only
/// interaction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub relationship: Relationship,
    #[serde(default)]
    pub stats: RelationshipStats,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// A standalone boundary the user maintains independently of any
/// relationship. Only the baseline alignment scorer reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub title: String,
    pub category: String,
    pub importance: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagPolarity {
    Green,
    Red,
}

impl FlagPolarity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}
