use super::config::ScoringConfig;
use super::views::{CompatibilityBand, CompatibilityInsight, OverallCompatibility, ScoreStatus};

/// Reduces the category insights to one headline number: the unweighted mean
/// of the category scores, or a defined zero when there are no insights.
/// Callers never see NaN.
pub(crate) fn aggregate_overall(
    insights: &[CompatibilityInsight],
    config: &ScoringConfig,
) -> OverallCompatibility {
    let score = if insights.is_empty() {
        0.0
    } else {
        insights.iter().map(|entry| entry.score).sum::<f32>() / insights.len() as f32
    };

    let band = match config.overall.status(score) {
        ScoreStatus::Excellent => CompatibilityBand::HighlyCompatible,
        ScoreStatus::Good => CompatibilityBand::ModeratelyCompatible,
        ScoreStatus::Concerning => CompatibilityBand::SomeIssues,
        ScoreStatus::Poor => CompatibilityBand::LowCompatibility,
    };

    OverallCompatibility {
        score,
        band,
        band_label: band.label(),
    }
}
