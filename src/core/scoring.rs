use crate::core::catalog::SkillCatalog;
use crate::core::vector::{cosine_similarity, skills_to_vector};
use crate::models::{BreakdownDetail, CandidateProfile, MatchBreakdown, ScoringWeights};

/// Age gap (in years) at which age similarity decays to zero
const MAX_AGE_GAP_YEARS: f64 = 20.0;

/// Calculate age similarity (0-1) between two optional ages
///
/// Linear decay to zero at a 20-year gap, floored at zero beyond it. A
/// missing or zero age on either side scores 0.0: users without a stated age
/// are treated as age-incompatible, which biases the blend toward skill
/// similarity. Flagged for product confirmation; until then this matches the
/// shipped behavior.
#[inline]
pub fn age_similarity(age1: Option<u8>, age2: Option<u8>) -> f64 {
    match (age1, age2) {
        (Some(a), Some(b)) if a > 0 && b > 0 => {
            let gap = (f64::from(a) - f64::from(b)).abs();
            (1.0 - gap / MAX_AGE_GAP_YEARS).max(0.0)
        }
        _ => 0.0,
    }
}

/// Skills of profile A that also appear in profile B's skill list
///
/// Both sides are lowercased and trimmed before comparison. Order follows
/// profile A's list, and duplicates in A are kept (no de-duplication). The
/// catalog is not consulted, so names outside the catalog can still appear
/// here when both profiles list them.
pub fn common_skills(skills1: Option<&[String]>, skills2: Option<&[String]>) -> Vec<String> {
    let (Some(skills1), Some(skills2)) = (skills1, skills2) else {
        return Vec::new();
    };

    let normalized2: Vec<String> = skills2.iter().map(|s| s.trim().to_lowercase()).collect();

    skills1
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|skill| normalized2.contains(skill))
        .collect()
}

/// Calculate the full match breakdown between two profiles
///
/// Overall similarity blends skill-vector cosine similarity and age proximity
/// using the configured weights (defaults 0.8 / 0.2). Overall, skills, and
/// age are each scaled independently to an integer percent in [0, 100],
/// rounding half away from zero. Never fails: missing skills or ages degrade
/// to zero similarity on that axis.
pub fn calculate_match_percentage(
    catalog: &SkillCatalog,
    weights: &ScoringWeights,
    profile1: &CandidateProfile,
    profile2: &CandidateProfile,
) -> MatchBreakdown {
    let vector1 = skills_to_vector(catalog, profile1.skills.as_deref());
    let vector2 = skills_to_vector(catalog, profile2.skills.as_deref());

    let skills_similarity = cosine_similarity(&vector1, &vector2);
    let age_sim = age_similarity(profile1.age, profile2.age);

    let overall = skills_similarity * weights.skills + age_sim * weights.age;

    MatchBreakdown {
        overall: to_percent(overall),
        skills: to_percent(skills_similarity),
        age: to_percent(age_sim),
        breakdown: BreakdownDetail {
            skills_weight: to_percent(weights.skills),
            age_weight: to_percent(weights.age),
            common_skills: common_skills(profile1.skills.as_deref(), profile2.skills.as_deref()),
        },
    }
}

/// Scale a similarity in [0, 1] to an integer percent
///
/// Rounding is half-away-from-zero (`f64::round`), pinned so scores are
/// reproducible across platforms and test suites.
#[inline]
fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}
