// Core algorithm exports
pub mod catalog;
pub mod ranker;
pub mod scoring;
pub mod vector;

pub use catalog::{CatalogError, SkillCatalog};
pub use ranker::Ranker;
pub use scoring::{age_similarity, calculate_match_percentage, common_skills};
pub use vector::{cosine_similarity, skills_to_vector};
