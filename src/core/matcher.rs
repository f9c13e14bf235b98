use std::collections::HashSet;

use crate::models::{MatchResult, SkillProfile};

/// Build the normalized comparison set for a skill list.
///
/// Skills are matched case-insensitively, so every tag is lowercased before
/// comparison. Duplicates collapse because comparison is against sets, not
/// multisets.
#[inline]
fn skill_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

/// Intersection-over-Union (Jaccard) similarity between two skill sets.
///
/// Returns a value in [0.0, 1.0]. When both sets are empty the ratio is
/// 0/0; we define that as 0.0 — no declared skills is "no information",
/// not a perfect match.
#[inline]
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

/// Rank a pool of mentors against a mentee by normalized skill overlap.
///
/// Produces exactly one `MatchResult` per candidate, sorted by score
/// descending. The sort is stable, so candidates with equal scores keep
/// their input order — output is deterministic for fixed inputs.
///
/// An empty candidate pool yields an empty result; a mentee with no
/// declared skills is a valid (degenerate) input and scores 0.0 against
/// every candidate.
pub fn rank(reference: &SkillProfile, candidates: &[SkillProfile]) -> Vec<MatchResult> {
    let reference_set = skill_set(&reference.skills);

    let mut results: Vec<MatchResult> = candidates
        .iter()
        .map(|candidate| MatchResult {
            mentor_id: candidate.id.clone(),
            score: jaccard_similarity(&reference_set, &skill_set(&candidate.skills)),
        })
        .collect();

    // Vec::sort_by is stable: equal scores retain input relative order
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}
