use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User profile as consumed by the ranking engine
///
/// Field names follow the user-store document shape (`_id`, `firstName`, ...).
/// Everything except the identifier is optional: the engine degrades
/// gracefully instead of rejecting partial profiles. Attributes the engine
/// does not know about are captured in `extra` and carried through ranking
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Scoring weights for the similarity blend
///
/// Must sum to 1.0 for overall scores to span the full 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub age: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.8,
            age: 0.2,
        }
    }
}

/// Full score breakdown for one requester/candidate comparison
///
/// All three scores are independent integer percents: `overall` is the
/// weighted blend, `skills` and `age` are the unweighted per-axis scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub overall: u8,
    pub skills: u8,
    pub age: u8,
    pub breakdown: BreakdownDetail,
}

/// Weight and common-skill detail attached to every breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownDetail {
    #[serde(rename = "skillsWeight")]
    pub skills_weight: u8,
    #[serde(rename = "ageWeight")]
    pub age_weight: u8,
    #[serde(rename = "commonSkills")]
    pub common_skills: Vec<String>,
}

/// A candidate profile with its match score attached
///
/// The profile fields are flattened, so serialized output carries all the
/// original candidate attributes plus `matchPercentage` and `matchBreakdown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "matchBreakdown")]
    pub match_breakdown: MatchBreakdown,
}
