use crate::core::catalog::SkillCatalog;

/// Convert a skill list into a binary presence vector
///
/// The vector has one component per catalog dimension: 1.0 where the skill
/// (lowercased and trimmed) appears anywhere in the input, 0.0 otherwise.
/// Unrecognized skill names are ignored, and a missing skill list yields the
/// all-zero vector. Deterministic for a given catalog.
pub fn skills_to_vector(catalog: &SkillCatalog, skills: Option<&[String]>) -> Vec<f64> {
    let mut vector = vec![0.0; catalog.dimension()];

    let Some(skills) = skills else {
        return vector;
    };

    for skill in skills {
        if let Some(index) = catalog.index_of(skill) {
            vector[index] = 1.0;
        }
    }

    vector
}

/// Cosine similarity between two skill vectors
///
/// Returns 0.0 when the vectors differ in length (no meaningful comparison
/// across catalogs) or when either magnitude is zero (a profile with no
/// recognized skills has no basis for similarity). Output is in [0, 1] for
/// binary presence vectors.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot_product = 0.0;
    let mut magnitude_a = 0.0;
    let mut magnitude_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot_product += x * y;
        magnitude_a += x * x;
        magnitude_b += y * y;
    }

    magnitude_a = magnitude_a.sqrt();
    magnitude_b = magnitude_b.sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}
