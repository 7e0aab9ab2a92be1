use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::{CatalogError, Ranker, SkillCatalog};
use crate::models::ScoringWeights;
use std::sync::Arc;

/// Engine configuration
///
/// Every section has defaults, so an embedding application with no config
/// file gets the built-in catalog and standard 0.8 / 0.2 weights.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_age_weight")]
    pub age: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            age: default_age_weight(),
        }
    }
}

fn default_skills_weight() -> f64 {
    0.8
}
fn default_age_weight() -> f64 {
    0.2
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub min_threshold: u8,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_threshold: 0,
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 {
    10
}
fn default_max_limit() -> u16 {
    50
}

/// Catalog extensions on top of the built-in skill table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// Extra canonical skills, each assigned a fresh dimension index
    #[serde(default)]
    pub extra_skills: Vec<String>,
    /// Extra synonyms: map from variant spelling to canonical name
    #[serde(default)]
    pub synonyms: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DEVLINK__,
    ///    e.g. DEVLINK__MATCHING__MIN_THRESHOLD -> matching.min_threshold)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("DEVLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DEVLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Build a skill catalog from the built-in table plus configured extensions
    pub fn build_catalog(&self) -> Result<SkillCatalog, CatalogError> {
        let mut catalog = SkillCatalog::builtin();
        catalog.add_skills(&self.catalog.extra_skills)?;
        catalog.add_synonyms(
            self.catalog
                .synonyms
                .iter()
                .map(|(synonym, canonical)| (synonym.as_str(), canonical.as_str())),
        )?;
        Ok(catalog)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            skills: self.scoring.weights.skills,
            age: self.scoring.weights.age,
        }
    }

    /// Build a ready-to-use ranker from these settings
    pub fn build_ranker(&self) -> Result<Ranker, CatalogError> {
        let catalog = self.build_catalog()?;
        Ok(Ranker::new(Arc::new(catalog), self.scoring_weights()))
    }
}
