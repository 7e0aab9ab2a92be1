// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BreakdownDetail, CandidateProfile, MatchBreakdown, RankedCandidate, ScoringWeights};
pub use requests::RankRequest;
pub use responses::RankResponse;
