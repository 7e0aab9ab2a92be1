use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while extending the skill catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate skill name: {0}")]
    DuplicateSkill(String),

    #[error("synonym '{synonym}' refers to unknown skill '{canonical}'")]
    UnknownCanonical { synonym: String, canonical: String },
}

/// Canonical skill names, in dimension order
///
/// The position of each name is its vector index, so appending is safe but
/// reordering changes the meaning of every stored vector.
const BUILTIN_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node.js",
    "angular",
    "vue",
    "typescript",
    "php",
    "c++",
    "c#",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    "flutter",
    "react native",
    "mongodb",
    "mysql",
    "postgresql",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "machine learning",
    "ai",
    "data science",
    "blockchain",
    "cybersecurity",
    "devops",
    "frontend",
    "backend",
    "fullstack",
    "mobile development",
    "web development",
    "game development",
    "ui/ux",
    "design",
    "testing",
    "automation",
];

/// Recognized spelling variants, mapped to their canonical form
const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    ("nodejs", "node.js"),
    ("node", "node.js"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("reactjs", "react"),
    ("vuejs", "vue"),
    ("golang", "go"),
    ("postgres", "postgresql"),
    ("k8s", "kubernetes"),
    ("ml", "machine learning"),
    ("react-native", "react native"),
];

/// Immutable mapping from skill name to vector dimension index
///
/// Built once at startup and shared read-only across all ranking requests.
/// Synonyms collapse to the same index as their canonical form, so
/// "nodejs" and "node.js" produce identical vectors.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    indices: HashMap<String, usize>,
    dimension: usize,
}

impl SkillCatalog {
    /// Build the built-in catalog of canonical skills and synonyms
    pub fn builtin() -> Self {
        let mut indices = HashMap::with_capacity(BUILTIN_SKILLS.len() + BUILTIN_SYNONYMS.len());

        for (index, name) in BUILTIN_SKILLS.iter().enumerate() {
            indices.insert((*name).to_string(), index);
        }

        for (synonym, canonical) in BUILTIN_SYNONYMS {
            if let Some(&index) = indices.get(*canonical) {
                indices.insert((*synonym).to_string(), index);
            }
        }

        Self {
            indices,
            dimension: BUILTIN_SKILLS.len(),
        }
    }

    /// Number of dimensions in every skill vector produced from this catalog
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Look up the dimension index for a skill name
    ///
    /// Input is normalized (lowercased and trimmed) before the lookup, so
    /// "  JavaScript " and "javascript" resolve to the same index.
    /// Unrecognized names return `None`.
    pub fn index_of(&self, skill: &str) -> Option<usize> {
        let normalized = skill.trim().to_lowercase();
        self.indices.get(normalized.as_str()).copied()
    }

    /// Check whether a skill name (or synonym) is recognized
    pub fn contains(&self, skill: &str) -> bool {
        self.index_of(skill).is_some()
    }

    /// Append extra canonical skills, each getting a fresh dimension index
    ///
    /// Names are normalized before insertion. A name already present in the
    /// catalog (canonical or synonym) is rejected rather than silently
    /// re-indexed.
    pub fn add_skills<I, S>(&mut self, skills: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for skill in skills {
            let normalized = skill.as_ref().trim().to_lowercase();
            if self.indices.contains_key(&normalized) {
                return Err(CatalogError::DuplicateSkill(normalized));
            }
            self.indices.insert(normalized, self.dimension);
            self.dimension += 1;
        }
        Ok(())
    }

    /// Register extra synonyms for already-known canonical skills
    pub fn add_synonyms<I, S>(&mut self, synonyms: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        for (synonym, canonical) in synonyms {
            let synonym = synonym.as_ref().trim().to_lowercase();
            let canonical = canonical.as_ref().trim().to_lowercase();

            let Some(&index) = self.indices.get(canonical.as_str()) else {
                return Err(CatalogError::UnknownCanonical { synonym, canonical });
            };

            if let Some(&existing) = self.indices.get(synonym.as_str()) {
                if existing != index {
                    return Err(CatalogError::DuplicateSkill(synonym));
                }
                continue;
            }

            self.indices.insert(synonym, index);
        }
        Ok(())
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dimension() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.dimension(), 43);
    }

    #[test]
    fn test_lookup_normalizes_input() {
        let catalog = SkillCatalog::builtin();

        assert_eq!(catalog.index_of("javascript"), Some(0));
        assert_eq!(catalog.index_of("  JavaScript "), Some(0));
        assert_eq!(catalog.index_of("RUST"), Some(13));
    }

    #[test]
    fn test_synonym_shares_index() {
        let catalog = SkillCatalog::builtin();

        assert_eq!(catalog.index_of("nodejs"), catalog.index_of("node.js"));
        assert_eq!(catalog.index_of("k8s"), catalog.index_of("kubernetes"));
        assert!(catalog.index_of("nodejs").is_some());
    }

    #[test]
    fn test_unrecognized_skill() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.index_of("underwater basket weaving"), None);
        assert!(!catalog.contains("cobol"));
    }

    #[test]
    fn test_add_skills_extends_dimension() {
        let mut catalog = SkillCatalog::builtin();
        catalog.add_skills(["elixir", "GraphQL"]).unwrap();

        assert_eq!(catalog.dimension(), 45);
        assert_eq!(catalog.index_of("elixir"), Some(43));
        assert_eq!(catalog.index_of("graphql"), Some(44));
    }

    #[test]
    fn test_add_duplicate_skill_fails() {
        let mut catalog = SkillCatalog::builtin();
        let err = catalog.add_skills(["Rust"]).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateSkill(name) if name == "rust"));
    }

    #[test]
    fn test_add_synonym_for_unknown_canonical_fails() {
        let mut catalog = SkillCatalog::builtin();
        let err = catalog.add_synonyms([("ex", "elixir")]).unwrap_err();

        assert!(matches!(err, CatalogError::UnknownCanonical { .. }));
    }

    #[test]
    fn test_add_synonym() {
        let mut catalog = SkillCatalog::builtin();
        catalog.add_synonyms([("py", "python")]).unwrap();

        assert_eq!(catalog.index_of("py"), catalog.index_of("python"));
        // Dimension unchanged: synonyms do not add a new axis
        assert_eq!(catalog.dimension(), 43);
    }
}
