use super::config::ScoringConfig;
use super::views::{FlagAssessment, FlagTier, ScoreStatus};
use crate::compat::domain::RelationshipStats;

/// Second, independent compatibility estimate used where no baseline or
/// interaction history exists but aggregate flag counts do.
///
/// With no flags recorded the ratio defaults to the neutral midpoint rather
/// than zero; a brand-new relationship is unknown, not failing. When a
/// safety rating is present the final score blends the flag ratio with the
/// rating scaled to 0-100, clamped so an out-of-range rating degrades
/// instead of overflowing.
pub(crate) fn score_flag_ratio(
    stats: &RelationshipStats,
    config: &ScoringConfig,
) -> FlagAssessment {
    let total_flags = stats.green_flags + stats.red_flags;
    let flag_ratio = if total_flags > 0 {
        ((stats.green_flags as f32 / total_flags as f32) * 100.0).round() as u8
    } else {
        config.neutral_flag_score
    };

    let score = match stats.average_safety_rating {
        Some(rating) => (f32::from(flag_ratio) * config.flag_ratio_weight
            + rating * 10.0 * config.safety_rating_weight)
            .round()
            .clamp(0.0, 100.0) as u8,
        None => flag_ratio,
    };

    let tier = match config.flag_tier.status(f32::from(score)) {
        ScoreStatus::Excellent => FlagTier::Thriving,
        ScoreStatus::Good => FlagTier::Stable,
        ScoreStatus::Concerning => FlagTier::Strained,
        ScoreStatus::Poor => FlagTier::AtRisk,
    };

    FlagAssessment {
        score,
        flag_ratio,
        tier,
        tier_label: tier.label(),
        color: tier.color(),
    }
}
