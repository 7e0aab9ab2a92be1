//! DevLink Algo - Candidate ranking engine for the DevLink developer network
//!
//! This library scores candidate profiles against a requesting user by
//! blending skill-vector cosine similarity with age proximity, and returns
//! the candidates ranked by descending match percentage.
//!
//! The engine is pure and stateless aside from the immutable [`SkillCatalog`]
//! built once at startup, so a single [`Ranker`] can be cloned into any
//! number of concurrent request handlers.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{Ranker, SkillCatalog, cosine_similarity, skills_to_vector};
pub use crate::models::{
    CandidateProfile, MatchBreakdown, RankRequest, RankResponse, RankedCandidate, ScoringWeights,
};
