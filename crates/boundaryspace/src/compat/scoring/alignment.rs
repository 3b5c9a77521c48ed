use super::config::ScoringConfig;
use super::views::BoundaryAlignment;
use crate::compat::domain::{Baseline, Boundary};

/// Estimates how well the user's standalone boundaries line up with the
/// non-negotiable list in their baseline, independent of any relationship.
///
/// Returns `None` when there is no baseline or no boundaries; callers render
/// a prompt-to-complete-baseline state instead of a score. Boundaries at or
/// above the importance cutoff are classified non-negotiable and must match
/// a baseline entry to count as aligned; everything below the cutoff is
/// flexible and always counts as aligned (flexible boundaries carry no
/// negative signal).
pub(crate) fn score_boundary_alignment(
    boundaries: &[Boundary],
    baseline: Option<&Baseline>,
    config: &ScoringConfig,
) -> Option<BoundaryAlignment> {
    let baseline = baseline?;
    if boundaries.is_empty() {
        return None;
    }

    let mut aligned = 0usize;
    let mut non_negotiable_total = 0usize;
    let mut non_negotiable_aligned = 0usize;

    for boundary in boundaries {
        if boundary.importance >= config.non_negotiable_importance {
            non_negotiable_total += 1;
            if matches_baseline_entry(boundary, &baseline.non_negotiable_boundaries) {
                non_negotiable_aligned += 1;
                aligned += 1;
            }
        } else {
            aligned += 1;
        }
    }

    let total = boundaries.len();
    let score = ((aligned as f32 / total as f32) * 100.0).round() as u8;

    Some(BoundaryAlignment {
        score,
        aligned,
        total,
        non_negotiable_total,
        non_negotiable_aligned,
    })
}

/// Case-insensitive bidirectional substring containment between the
/// boundary's title/category and the free-text baseline entries.
///
/// This is a known-imprecise heuristic over free text, not a structured
/// join: "communication" matches a baseline entry of "poor communication"
/// and vice versa. Precision improvements belong in a shared category enum,
/// not in tightening this check.
fn matches_baseline_entry(boundary: &Boundary, entries: &[String]) -> bool {
    let title = boundary.title.to_lowercase();
    let category = boundary.category.to_lowercase();

    entries.iter().any(|entry| {
        let entry = entry.to_lowercase();
        if entry.is_empty() {
            return false;
        }
        contains_either_way(&entry, &title) || contains_either_way(&entry, &category)
    })
}

fn contains_either_way(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}
