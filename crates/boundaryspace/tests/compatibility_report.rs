use chrono::{TimeZone, Utc};

use boundaryspace::compat::{
    derive_notifications, Baseline, Boundary, CommunicationStyle, CompatibilityBand,
    CompatibilityEngine, ConflictResolution, Interaction, NeedLevel, Relationship, RelationshipId,
    RelationshipKind, RelationshipRecord, RelationshipStats, RelationshipStatus, ScoreStatus,
    ScoringConfig,
};

fn ts(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 18, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn baseline() -> Baseline {
    Baseline {
        communication_style: CommunicationStyle::Collaborative,
        conflict_resolution: ConflictResolution::CoolOffFirst,
        personal_space_needs: NeedLevel::Medium,
        emotional_support_level: NeedLevel::High,
        non_negotiable_boundaries: vec!["poor communication".to_string()],
        flexible_boundaries: vec!["last-minute plans".to_string()],
        triggers: vec!["raised voices".to_string()],
        version: 1,
        recorded_at: ts(1),
    }
}

fn interaction(day: u32, respected: bool, energy: (u8, u8)) -> Interaction {
    Interaction {
        logged_at: ts(day),
        communication_style_respected: respected,
        boundaries_respected: respected,
        boundaries_violated: Vec::new(),
        triggers_avoided: respected,
        boundary_tested: false,
        energy_before: Some(energy.0),
        energy_after: Some(energy.1),
        self_worth_before: Some(5),
        self_worth_after: Some(5),
        deal_breakers_crossed: Vec::new(),
    }
}

#[test]
fn report_covers_all_five_categories_with_bounded_scores() {
    let engine = CompatibilityEngine::default();
    let interactions = vec![
        interaction(2, true, (5, 7)),
        interaction(3, false, (6, 4)),
        interaction(4, true, (5, 5)),
    ];

    let report = engine.report("Alex", &interactions, &baseline());

    assert_eq!(report.insights.len(), 5);
    assert_eq!(report.sample_size, 3);
    for insight in &report.insights {
        assert!(insight.score >= 0.0 && insight.score <= 100.0);
        assert!(!insight.insight.is_empty());
        assert!(!insight.recommendation.is_empty());
    }
    assert!(report.overall.score >= 0.0 && report.overall.score <= 100.0);
}

#[test]
fn hostile_history_lands_in_the_low_band() {
    let engine = CompatibilityEngine::default();
    let interactions: Vec<_> = (2..=6)
        .map(|day| interaction(day, false, (8, 3)))
        .collect();

    let report = engine.report("Jordan", &interactions, &baseline());

    assert_eq!(report.insights[0].status, ScoreStatus::Poor);
    assert_eq!(report.overall.band, CompatibilityBand::LowCompatibility);
}

#[test]
fn empty_history_reports_zero_overall_without_panicking() {
    let engine = CompatibilityEngine::default();
    let report = engine.report("Alex", &[], &baseline());

    assert!(report.insights.is_empty());
    assert_eq!(report.overall.score, 0.0);
    assert!(!report.overall.score.is_nan());
}

#[test]
fn alignment_and_flags_complement_the_category_report() {
    let engine = CompatibilityEngine::new(ScoringConfig::default());

    let boundaries = vec![
        Boundary {
            title: "No stonewalling".to_string(),
            category: "communication".to_string(),
            importance: 9,
        },
        Boundary {
            title: "Saturday mornings to myself".to_string(),
            category: "personal time".to_string(),
            importance: 4,
        },
    ];
    let alignment = engine
        .score_boundary_alignment(&boundaries, Some(&baseline()))
        .expect("alignment computed");
    assert_eq!(alignment.score, 100);

    let stats = RelationshipStats {
        green_flags: 8,
        red_flags: 2,
        average_safety_rating: Some(4.0),
        check_in_count: 3,
    };
    let assessment = engine.score_flag_ratio(&stats);
    assert_eq!(assessment.score, 68);
}

#[test]
fn notification_cards_derive_from_passed_in_time_only() {
    let record = RelationshipRecord {
        relationship: Relationship {
            id: RelationshipId("rel-1".to_string()),
            name: "Alex".to_string(),
            kind: RelationshipKind::Friendship,
            status: RelationshipStatus::Active,
        },
        stats: RelationshipStats::default(),
        interactions: vec![interaction(2, true, (5, 7))],
    };

    let quiet = derive_notifications(&[record.clone()], ts(4), 2);
    assert!(quiet.iter().all(|card| card.title != "Time to Check In"));

    let overdue = derive_notifications(&[record], ts(20), 2);
    assert!(overdue.iter().any(|card| card.title == "Time to Check In"));
}
