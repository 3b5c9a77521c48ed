use super::config::{ScoringConfig, ThresholdSet};
use super::views::{CompatibilityInsight, InsightCategory};
use crate::compat::domain::{Baseline, Interaction};

/// Computes the five per-category insights for one relationship.
///
/// An empty interaction list returns an empty Vec rather than five
/// zero-score insights; callers render that as a "log an interaction first"
/// state. With at least one interaction the result always contains exactly
/// five entries in the fixed category order.
pub(crate) fn score_categories(
    interactions: &[Interaction],
    baseline: &Baseline,
    relationship_name: &str,
    config: &ScoringConfig,
) -> Vec<CompatibilityInsight> {
    if interactions.is_empty() {
        return Vec::new();
    }

    InsightCategory::ordered()
        .into_iter()
        .map(|category| match category {
            InsightCategory::CommunicationStyle => {
                score_communication(interactions, baseline, relationship_name, config)
            }
            InsightCategory::BoundaryRespect => {
                score_boundary_respect(interactions, relationship_name, config)
            }
            InsightCategory::TriggerManagement => {
                score_trigger_management(interactions, relationship_name, config)
            }
            InsightCategory::EnergyImpact => {
                score_energy_impact(interactions, relationship_name, config)
            }
            InsightCategory::SelfWorthImpact => {
                score_self_worth_impact(interactions, relationship_name, config)
            }
        })
        .collect()
}

fn ratio_score(count: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (count as f32 / total as f32) * 100.0
}

fn insight(
    category: InsightCategory,
    score: f32,
    thresholds: &ThresholdSet,
    text: String,
    recommendation: String,
) -> CompatibilityInsight {
    let score = score.clamp(0.0, 100.0);
    let status = thresholds.status(score);
    CompatibilityInsight {
        category,
        category_label: category.label(),
        score,
        status,
        status_label: status.label(),
        insight: text,
        recommendation,
    }
}

fn score_communication(
    interactions: &[Interaction],
    baseline: &Baseline,
    name: &str,
    config: &ScoringConfig,
) -> CompatibilityInsight {
    let respected = interactions
        .iter()
        .filter(|entry| entry.communication_style_respected)
        .count();
    let score = ratio_score(respected, interactions.len());
    let style = baseline.communication_style.label();

    let text = format!(
        "{name} respects your {style} communication style in {score:.0}% of logged interactions"
    );
    let recommendation = if score < config.communication.good {
        format!("Consider sharing how your {style} style works best for you, and revisit after a few more check-ins")
    } else {
        "Keep reinforcing the communication patterns that are working".to_string()
    };

    insight(
        InsightCategory::CommunicationStyle,
        score,
        &config.communication,
        text,
        recommendation,
    )
}

fn score_boundary_respect(
    interactions: &[Interaction],
    name: &str,
    config: &ScoringConfig,
) -> CompatibilityInsight {
    let respected = interactions
        .iter()
        .filter(|entry| entry.boundaries_respected)
        .count();
    let score = ratio_score(respected, interactions.len());

    let text = format!("Your boundaries were respected in {score:.0}% of interactions with {name}");
    let recommendation = if score < config.boundary_respect.good {
        format!("Restate the boundaries that matter most and watch how {name} responds")
    } else {
        "Your boundaries are holding; keep naming them early".to_string()
    };

    insight(
        InsightCategory::BoundaryRespect,
        score,
        &config.boundary_respect,
        text,
        recommendation,
    )
}

fn score_trigger_management(
    interactions: &[Interaction],
    name: &str,
    config: &ScoringConfig,
) -> CompatibilityInsight {
    let avoided = interactions
        .iter()
        .filter(|entry| entry.triggers_avoided)
        .count();
    let score = ratio_score(avoided, interactions.len());

    let text = format!("{name} avoided your known triggers in {score:.0}% of interactions");
    let recommendation = if score < config.trigger_management.good {
        "Share which situations are hardest for you so they can be steered around".to_string()
    } else {
        "Trigger awareness is strong in this relationship".to_string()
    };

    insight(
        InsightCategory::TriggerManagement,
        score,
        &config.trigger_management,
        text,
        recommendation,
    )
}

/// Average before/after delta rescaled so -5 maps to 0, no change to 50, and
/// +5 to 100. Missing gauges fall back to the scale midpoint so sparse
/// entries read as neutral, never as drain.
fn gauge_score(mean_change: f32, midpoint: f32) -> f32 {
    (((mean_change + midpoint) / (midpoint * 2.0)) * 100.0).clamp(0.0, 100.0)
}

fn mean_change(
    interactions: &[Interaction],
    midpoint: f32,
    select: impl Fn(&Interaction) -> (Option<u8>, Option<u8>),
) -> f32 {
    let total: f32 = interactions
        .iter()
        .map(|entry| {
            let (before, after) = select(entry);
            let before = before.map(f32::from).unwrap_or(midpoint);
            let after = after.map(f32::from).unwrap_or(midpoint);
            after - before
        })
        .sum();
    total / interactions.len() as f32
}

fn score_energy_impact(
    interactions: &[Interaction],
    name: &str,
    config: &ScoringConfig,
) -> CompatibilityInsight {
    let mean = mean_change(interactions, config.scale_midpoint, |entry| {
        (entry.energy_before, entry.energy_after)
    });
    let score = gauge_score(mean, config.scale_midpoint);

    let text = if mean >= 0.0 {
        format!("Time with {name} energizes you (average change {mean:+.1})")
    } else {
        format!("Time with {name} tends to drain your energy (average change {mean:+.1})")
    };
    let recommendation = if mean < -1.0 {
        format!("Plan shorter or lower-stakes time with {name} and protect recovery time afterwards")
    } else {
        "Energy levels are holding steady around this relationship".to_string()
    };

    insight(
        InsightCategory::EnergyImpact,
        score,
        &config.energy_impact,
        text,
        recommendation,
    )
}

fn score_self_worth_impact(
    interactions: &[Interaction],
    name: &str,
    config: &ScoringConfig,
) -> CompatibilityInsight {
    let mean = mean_change(interactions, config.scale_midpoint, |entry| {
        (entry.self_worth_before, entry.self_worth_after)
    });
    let score = gauge_score(mean, config.scale_midpoint);

    let text = if mean >= 0.0 {
        format!("You tend to feel better about yourself after time with {name} (average change {mean:+.1})")
    } else {
        format!("Your self-worth tends to dip after time with {name} (average change {mean:+.1})")
    };
    let recommendation = if mean < -1.0 {
        "Notice which moments leave you feeling smaller, and name them at the next check-in"
            .to_string()
    } else {
        "This relationship is supporting how you see yourself".to_string()
    };

    insight(
        InsightCategory::SelfWorthImpact,
        score,
        &config.self_worth_impact,
        text,
        recommendation,
    )
}
