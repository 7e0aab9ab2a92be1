use crate::models::domain::RankedCandidate;
use serde::{Deserialize, Serialize};

/// Response for the rank-candidates call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
}
