use super::common::*;
use crate::compat::scoring::{
    CompatibilityBand, CompatibilityInsight, InsightCategory, ScoreStatus,
};

fn insight_with_score(score: f32) -> CompatibilityInsight {
    CompatibilityInsight {
        category: InsightCategory::CommunicationStyle,
        category_label: InsightCategory::CommunicationStyle.label(),
        score,
        status: ScoreStatus::Good,
        status_label: ScoreStatus::Good.label(),
        insight: String::new(),
        recommendation: String::new(),
    }
}

#[test]
fn empty_insights_aggregate_to_defined_zero() {
    let engine = engine();
    let overall = engine.aggregate_overall(&[]);

    assert_eq!(overall.score, 0.0);
    assert!(!overall.score.is_nan());
    assert_eq!(overall.band, CompatibilityBand::LowCompatibility);
}

#[test]
fn strong_interaction_report_is_highly_compatible() {
    let engine = engine();
    let report = engine.report("Alex", &[strong_interaction(2)], &baseline());

    // mean(100, 100, 100, 80, 70) = 90.
    assert_eq!(report.overall.score, 90.0);
    assert_eq!(report.overall.band, CompatibilityBand::HighlyCompatible);
    assert_eq!(report.overall.band_label, "Highly Compatible");
    assert_eq!(report.sample_size, 1);
}

#[test]
fn band_boundaries_are_inclusive() {
    let engine = engine();

    let at_eighty = engine.aggregate_overall(&[insight_with_score(80.0)]);
    assert_eq!(at_eighty.band, CompatibilityBand::HighlyCompatible);

    let at_sixty = engine.aggregate_overall(&[insight_with_score(60.0)]);
    assert_eq!(at_sixty.band, CompatibilityBand::ModeratelyCompatible);

    let at_forty = engine.aggregate_overall(&[insight_with_score(40.0)]);
    assert_eq!(at_forty.band, CompatibilityBand::SomeIssues);

    let below = engine.aggregate_overall(&[insight_with_score(39.5)]);
    assert_eq!(below.band, CompatibilityBand::LowCompatibility);
}

#[test]
fn aggregate_is_mean_of_category_scores() {
    let engine = engine();
    let insights = vec![
        insight_with_score(100.0),
        insight_with_score(50.0),
        insight_with_score(0.0),
    ];

    let overall = engine.aggregate_overall(&insights);
    assert_eq!(overall.score, 50.0);
}
