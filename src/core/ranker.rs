use std::sync::Arc;

use crate::core::catalog::SkillCatalog;
use crate::core::scoring::calculate_match_percentage;
use crate::models::{CandidateProfile, RankedCandidate, ScoringWeights};

/// Candidate ranking orchestrator
///
/// Scores every candidate against the requester and returns the survivors
/// sorted by descending match percentage. Pure and stateless aside from the
/// shared read-only catalog, so it can be cloned into any number of request
/// handlers without coordination.
#[derive(Debug, Clone)]
pub struct Ranker {
    catalog: Arc<SkillCatalog>,
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(catalog: Arc<SkillCatalog>, weights: ScoringWeights) -> Self {
        Self { catalog, weights }
    }

    /// Ranker with the built-in catalog and default 0.8 / 0.2 weights
    pub fn with_builtin_catalog() -> Self {
        Self {
            catalog: Arc::new(SkillCatalog::builtin()),
            weights: ScoringWeights::default(),
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Rank candidates against a requesting profile
    ///
    /// # Pipeline
    /// 1. Drop any candidate whose id equals the requester's id
    /// 2. Score each remaining candidate
    /// 3. Drop candidates scoring strictly below `min_threshold`
    /// 4. Sort by overall score, descending
    ///
    /// The sort is stable: candidates with equal scores keep their input
    /// order, so the output is deterministic for a fixed input. Never fails;
    /// malformed profiles degrade to zero-similarity scores. Pagination is
    /// the caller's responsibility.
    pub fn rank_candidates(
        &self,
        requester: &CandidateProfile,
        candidates: Vec<CandidateProfile>,
        min_threshold: u8,
    ) -> Vec<RankedCandidate> {
        let total_candidates = candidates.len();

        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.id != requester.id)
            .filter_map(|candidate| {
                let breakdown =
                    calculate_match_percentage(&self.catalog, &self.weights, requester, &candidate);

                tracing::trace!(
                    candidate_id = %candidate.id,
                    overall = breakdown.overall,
                    skills = breakdown.skills,
                    age = breakdown.age,
                    "scored candidate"
                );

                if breakdown.overall >= min_threshold {
                    Some(RankedCandidate {
                        match_percentage: breakdown.overall,
                        match_breakdown: breakdown,
                        profile: candidate,
                    })
                } else {
                    None
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        tracing::debug!(
            requester_id = %requester.id,
            total_candidates,
            ranked = ranked.len(),
            min_threshold,
            "ranked candidates"
        );

        ranked
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}
