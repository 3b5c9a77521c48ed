use crate::infra::{
    default_scoring_config, InMemoryNotificationSink, InMemoryRelationshipRepository,
};
use crate::routes::CompatibilityReportRequest;
use boundaryspace::compat::{
    BaselineDraft, CommunicationStyle, CompatibilityEngine, CompatibilityReport,
    CompatibilityService, ConflictResolution, FlagPolarity, Interaction, NeedLevel,
    RelationshipKind,
};
use boundaryspace::error::AppError;
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reference instant for notifications (RFC 3339 or YYYY-MM-DD).
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) today: Option<DateTime<Utc>>,
    /// Skip the notification portion of the demo output.
    #[arg(long)]
    pub(crate) skip_notifications: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON file holding the baseline, interactions, and optional boundaries/stats
    #[arg(long)]
    pub(crate) payload: PathBuf,
    /// Emit the raw report as JSON instead of rendered text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs { payload, json } = args;

    let raw = std::fs::read_to_string(payload)?;
    let request: CompatibilityReportRequest = serde_json::from_str(&raw)?;

    let engine = CompatibilityEngine::default();
    let report = engine.report(
        &request.relationship_name,
        &request.interactions,
        &request.baseline,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_compatibility_report(&report);
    }

    if !request.boundaries.is_empty() {
        if let Some(alignment) =
            engine.score_boundary_alignment(&request.boundaries, Some(&request.baseline))
        {
            println!(
                "\nBoundary alignment: {}% ({}/{} aligned, {}/{} non-negotiable)",
                alignment.score,
                alignment.aligned,
                alignment.total,
                alignment.non_negotiable_aligned,
                alignment.non_negotiable_total
            );
        }
    }

    if let Some(stats) = request.stats {
        let assessment = engine.score_flag_ratio(&stats);
        println!(
            "Flag assessment: {} ({}, {})",
            assessment.score, assessment.tier_label, assessment.color
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        skip_notifications,
    } = args;

    let today = today.unwrap_or_else(Utc::now);

    println!("BoundarySpace compatibility demo");

    let repository = Arc::new(InMemoryRelationshipRepository::default());
    let sink = Arc::new(InMemoryNotificationSink::default());
    let service = Arc::new(CompatibilityService::new(
        repository,
        sink.clone(),
        default_scoring_config(),
    ));

    let baseline = service.set_baseline(BaselineDraft {
        communication_style: CommunicationStyle::Direct,
        conflict_resolution: ConflictResolution::CoolOffFirst,
        personal_space_needs: NeedLevel::High,
        emotional_support_level: NeedLevel::Medium,
        non_negotiable_boundaries: vec!["dishonesty".to_string()],
        flexible_boundaries: vec!["spontaneous plans".to_string()],
        triggers: vec!["being interrupted".to_string()],
        recorded_at: today - Duration::days(7),
    })?;
    println!(
        "- Baseline v{} recorded ({} communication)",
        baseline.version,
        baseline.communication_style.label()
    );

    let partner = service.add_relationship("Alex".to_string(), RelationshipKind::Romantic)?;
    println!(
        "- Tracking {} ({})",
        partner.relationship.name,
        partner.relationship.kind.label()
    );

    for offset in [5, 3, 1] {
        service.log_interaction(
            &partner.relationship.id,
            demo_interaction(today - Duration::days(offset), offset != 3),
        )?;
    }
    service.record_flag(&partner.relationship.id, FlagPolarity::Green)?;
    service.record_check_in(&partner.relationship.id, 8)?;

    let report = service.report(&partner.relationship.id)?;
    println!(
        "\nReport for {} ({}, {} interactions)",
        report.relationship.name,
        report.availability_label,
        report.sample_size
    );
    for insight in &report.insights {
        println!(
            "- {}: {:.0} ({})",
            insight.category_label, insight.score, insight.status_label
        );
        println!("  {}", insight.insight);
        println!("  Next step: {}", insight.recommendation);
    }
    if let Some(overall) = report.overall {
        println!(
            "Overall: {:.0}% ({})",
            overall.score, overall.band_label
        );
    }
    println!(
        "Flag assessment: {} ({}, {})",
        report.flag_assessment.score,
        report.flag_assessment.tier_label,
        report.flag_assessment.color
    );

    if skip_notifications {
        return Ok(());
    }

    let published = sink.cards();
    if published.is_empty() {
        println!("\nNotifications: none published while logging");
    } else {
        println!("\nNotifications published while logging");
        for card in published {
            println!(
                "- [{}] {}: {}",
                card.priority.label(),
                card.title,
                card.message
            );
        }
    }

    let fresh = service.notifications(today)?;
    if fresh.is_empty() {
        println!("Nothing pending as of {today}");
    } else {
        println!("Pending as of {today}");
        for card in fresh {
            println!("- [{}] {} -> {}", card.priority.label(), card.title, card.action);
        }
    }

    Ok(())
}

fn demo_interaction(logged_at: DateTime<Utc>, positive: bool) -> Interaction {
    if positive {
        Interaction {
            logged_at,
            communication_style_respected: true,
            boundaries_respected: true,
            boundaries_violated: Vec::new(),
            triggers_avoided: true,
            boundary_tested: false,
            energy_before: Some(5),
            energy_after: Some(8),
            self_worth_before: Some(5),
            self_worth_after: Some(7),
            deal_breakers_crossed: Vec::new(),
        }
    } else {
        Interaction {
            logged_at,
            communication_style_respected: false,
            boundaries_respected: true,
            boundaries_violated: Vec::new(),
            triggers_avoided: false,
            boundary_tested: true,
            energy_before: Some(6),
            energy_after: Some(4),
            self_worth_before: Some(5),
            self_worth_after: Some(5),
            deal_breakers_crossed: Vec::new(),
        }
    }
}

fn render_compatibility_report(report: &CompatibilityReport) {
    println!(
        "Compatibility report for {} ({} interactions)",
        report.relationship_name, report.sample_size
    );

    if report.insights.is_empty() {
        println!("No interactions logged yet; nothing to score.");
        return;
    }

    for insight in &report.insights {
        println!(
            "- {}: {:.0} ({})",
            insight.category_label, insight.score, insight.status_label
        );
        println!("  {}", insight.insight);
        println!("  Next step: {}", insight.recommendation);
    }

    println!(
        "\nOverall: {:.0}% ({})",
        report.overall.score, report.overall.band_label
    );
}
